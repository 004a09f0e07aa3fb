use crate::config::database::Database;
use crate::service::user_service::UserService;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserState {
    pub(crate) user_service: UserService,
}

impl UserState {
    pub fn new(db_conn: &Arc<Database>, bcrypt_cost: u32) -> Self {
        Self {
            user_service: UserService::new(db_conn, bcrypt_cost),
        }
    }
}
