use crate::config::database::{Database, DatabaseTrait};
use crate::entity::refresh_token::RefreshToken;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct RefreshTokenRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[async_trait]
pub trait RefreshTokenRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    /// Insert one token row. Earlier rows for the same user are left in
    /// place; a user accumulates one live row per login or refresh.
    async fn create(&self, user_id: i64, token: &str, exp_at: i64) -> Result<RefreshToken, Error>;
}

#[async_trait]
impl RefreshTokenRepositoryTrait for RefreshTokenRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn create(&self, user_id: i64, token: &str, exp_at: i64) -> Result<RefreshToken, Error> {
        sqlx::query_as::<_, RefreshToken>(
            r#"
            INSERT INTO refresh_tokens (user_id, token, exp_at)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, token, exp_at
            "#,
        )
        .bind(user_id)
        .bind(token)
        .bind(exp_at)
        .fetch_one(self.db_conn.get_pool())
        .await
    }
}
