use crate::config::database::{Database, DatabaseTrait};
use crate::dto::product_dto::{CreateProductDto, ProductReadDto, UpdateProductDto};
use crate::entity::product::Product;
use async_trait::async_trait;
use sqlx::Error;
use std::sync::Arc;

const SELECT_WITH_CATEGORY: &str = r#"
    SELECT p.id, p.name, p.price, p.category_id, c.title AS category_title
    FROM products p
    JOIN categories c ON c.id = p.category_id
"#;

#[derive(Clone)]
pub struct ProductRepository {
    pub(crate) db_conn: Arc<Database>,
}

#[async_trait]
pub trait ProductRepositoryTrait {
    fn new(db_conn: &Arc<Database>) -> Self;
    async fn create(&self, payload: &CreateProductDto) -> Result<Product, Error>;
    async fn find(&self, id: i64) -> Result<Option<ProductReadDto>, Error>;
    async fn find_all(&self) -> Result<Vec<ProductReadDto>, Error>;
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Product>, Error>;
    async fn update(&self, id: i64, payload: &UpdateProductDto) -> Result<ProductReadDto, Error>;
    async fn delete(&self, id: i64) -> Result<u64, Error>;
}

#[async_trait]
impl ProductRepositoryTrait for ProductRepository {
    fn new(db_conn: &Arc<Database>) -> Self {
        Self {
            db_conn: Arc::clone(db_conn),
        }
    }

    async fn create(&self, payload: &CreateProductDto) -> Result<Product, Error> {
        sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, category_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, category_id
            "#,
        )
        .bind(&payload.name)
        .bind(payload.price)
        .bind(payload.category_id)
        .fetch_one(self.db_conn.get_pool())
        .await
    }

    async fn find(&self, id: i64) -> Result<Option<ProductReadDto>, Error> {
        sqlx::query_as::<_, ProductReadDto>(&format!("{} WHERE p.id = $1", SELECT_WITH_CATEGORY))
            .bind(id)
            .fetch_optional(self.db_conn.get_pool())
            .await
    }

    async fn find_all(&self) -> Result<Vec<ProductReadDto>, Error> {
        sqlx::query_as::<_, ProductReadDto>(&format!("{} ORDER BY p.id", SELECT_WITH_CATEGORY))
            .fetch_all(self.db_conn.get_pool())
            .await
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Product>, Error> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, category_id FROM products WHERE category_id = $1 ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(self.db_conn.get_pool())
        .await
    }

    async fn update(&self, id: i64, payload: &UpdateProductDto) -> Result<ProductReadDto, Error> {
        let updated: Product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                category_id = COALESCE($4, category_id)
            WHERE id = $1
            RETURNING id, name, price, category_id
            "#,
        )
        .bind(id)
        .bind(payload.name.as_deref())
        .bind(payload.price)
        .bind(payload.category_id)
        .fetch_one(self.db_conn.get_pool())
        .await?;

        self.find(updated.id).await?.ok_or(Error::RowNotFound)
    }

    async fn delete(&self, id: i64) -> Result<u64, Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.db_conn.get_pool())
            .await?;
        Ok(result.rows_affected())
    }
}
