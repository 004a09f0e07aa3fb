use crate::config::database::{Database, DatabaseTrait};
use crate::entity::user::User;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;
use tracing::error;

#[derive(Clone)]
pub struct UserRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[async_trait]
pub trait UserRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn find(&self, id: i64) -> Result<User, Error>;
    /// The refresh protocol's ownership check: the user must both exist and
    /// own a stored refresh-token row with this exact token string.
    async fn find_by_id_and_refresh_token(&self, id: i64, token: &str) -> Option<User>;
    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        fullname: &str,
        birth: &str,
        activation_link: &str,
    ) -> Result<User, Error>;
    async fn all(&self) -> Result<Vec<User>, Error>;
    async fn update(
        &self,
        id: i64,
        fullname: Option<&str>,
        birth: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, Error>;
    async fn mark_verified(&self, id: i64) -> Result<User, Error>;
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        match sqlx::query_as::<_, User>(
            "SELECT id, email, password, fullname, birth, verified, activation_link FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(self.db_conn.get_pool())
        .await
        {
            Ok(user) => user,
            Err(e) => {
                error!("User lookup by email failed: {}", e);
                None
            }
        }
    }

    async fn find(&self, id: i64) -> Result<User, Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password, fullname, birth, verified, activation_link FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn find_by_id_and_refresh_token(&self, id: i64, token: &str) -> Option<User> {
        match sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.email, u.password, u.fullname, u.birth, u.verified, u.activation_link
            FROM users u
            JOIN refresh_tokens rt ON rt.user_id = u.id
            WHERE u.id = $1 AND rt.token = $2
            "#,
        )
        .bind(id)
        .bind(token)
        .fetch_optional(self.db_conn.get_pool())
        .await
        {
            Ok(user) => user,
            Err(e) => {
                error!("User lookup by refresh token failed: {}", e);
                None
            }
        }
    }

    async fn create(
        &self,
        email: &str,
        password_hash: &str,
        fullname: &str,
        birth: &str,
        activation_link: &str,
    ) -> Result<User, Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, fullname, birth, verified, activation_link)
            VALUES ($1, $2, $3, $4, FALSE, $5)
            RETURNING id, email, password, fullname, birth, verified, activation_link
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(fullname)
        .bind(birth)
        .bind(activation_link)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn all(&self) -> Result<Vec<User>, Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password, fullname, birth, verified, activation_link FROM users ORDER BY id",
        )
        .fetch_all(self.db_conn.get_pool())
        .await
    }

    async fn update(
        &self,
        id: i64,
        fullname: Option<&str>,
        birth: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET fullname = COALESCE($2, fullname),
                birth = COALESCE($3, birth),
                password = COALESCE($4, password)
            WHERE id = $1
            RETURNING id, email, password, fullname, birth, verified, activation_link
            "#,
        )
        .bind(id)
        .bind(fullname)
        .bind(birth)
        .bind(password_hash)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn mark_verified(&self, id: i64) -> Result<User, Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET verified = TRUE
            WHERE id = $1
            RETURNING id, email, password, fullname, birth, verified, activation_link
            "#,
        )
        .bind(id)
        .fetch_one(self.db_conn.get_pool())
        .await
    }
}
