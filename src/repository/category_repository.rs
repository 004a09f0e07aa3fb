use crate::config::database::{Database, DatabaseTrait};
use crate::entity::category::Category;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct CategoryRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[async_trait]
pub trait CategoryRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn create(&self, title: &str) -> Result<Category, Error>;
    async fn find(&self, id: i64) -> Result<Option<Category>, Error>;
    async fn find_all(&self) -> Result<Vec<Category>, Error>;
    async fn delete(&self, id: i64) -> Result<u64, Error>;
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn create(&self, title: &str) -> Result<Category, Error> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (title) VALUES ($1) RETURNING id, title",
        )
        .bind(title)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn find(&self, id: i64) -> Result<Option<Category>, Error> {
        sqlx::query_as::<_, Category>("SELECT id, title FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn find_all(&self) -> Result<Vec<Category>, Error> {
        sqlx::query_as::<_, Category>("SELECT id, title FROM categories ORDER BY id")
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn delete(&self, id: i64) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
