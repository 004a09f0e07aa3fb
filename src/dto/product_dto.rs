use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "name must be a string"))]
    pub name: String,
    #[validate(range(min = 0, message = "price must be a positive number"))]
    pub price: i64,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct UpdateProductDto {
    pub name: Option<String>,
    #[validate(range(min = 0, message = "price must be a positive number"))]
    pub price: Option<i64>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<i64>,
}

/// Product joined with its category title.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProductReadDto {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub category_id: i64,
    pub category_title: String,
}
