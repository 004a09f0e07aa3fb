use crate::config::database::{Database, DatabaseTrait};
use crate::dto::favourite_dto::FavouriteReadDto;
use crate::entity::favourite::Favourite;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

#[derive(Clone)]
pub struct FavouriteRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[async_trait]
pub trait FavouriteRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn add(&self, user_id: i64, product_id: i64) -> Result<Favourite, Error>;
    async fn find_all_by_user(&self, user_id: i64) -> Result<Vec<FavouriteReadDto>, Error>;
    async fn delete(&self, user_id: i64, product_id: i64) -> Result<u64, Error>;
}

#[async_trait]
impl FavouriteRepositoryTrait for FavouriteRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn add(&self, user_id: i64, product_id: i64) -> Result<Favourite, Error> {
        sqlx::query_as::<_, Favourite>(
            r#"
            INSERT INTO favourites (user_id, product_id)
            VALUES ($1, $2)
            RETURNING id, user_id, product_id
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn find_all_by_user(&self, user_id: i64) -> Result<Vec<FavouriteReadDto>, Error> {
        sqlx::query_as::<_, FavouriteReadDto>(
            r#"
            SELECT f.id, f.product_id, p.name, p.price, p.category_id, c.title AS category_title
            FROM favourites f
            JOIN products p ON p.id = f.product_id
            JOIN categories c ON c.id = p.category_id
            WHERE f.user_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db_conn.get_pool())
        .await
    }

    async fn delete(&self, user_id: i64, product_id: i64) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM favourites WHERE user_id = $1 AND product_id = $2")
            .bind(user_id)
            .bind(product_id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
