use crate::config::database::Database;
use crate::repository::user_repository::{UserRepository, UserRepositoryTrait};
use crate::service::token_service::TokenService;
use std::sync::Arc;

/// State for the access-token guard middleware.
#[derive(Clone)]
pub struct TokenState {
    pub(crate) token_service: TokenService,
    pub(crate) user_repo: UserRepository,
}

impl TokenState {
    pub fn new(db_conn: &Arc<Database>, token_service: TokenService) -> Self {
        Self {
            token_service,
            user_repo: UserRepository::new(db_conn),
        }
    }
}
