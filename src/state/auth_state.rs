use crate::config::database::Database;
use crate::service::auth_service::AuthService;
use crate::service::token_service::TokenService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthState {
    pub(crate) auth_service: AuthService,
}

impl AuthState {
    pub fn new(db_conn: &Arc<Database>, token_service: TokenService) -> Self {
        Self {
            auth_service: AuthService::new(db_conn, token_service),
        }
    }
}
