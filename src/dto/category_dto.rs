use crate::entity::product::Product;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, message = "title must be a string"))]
    pub title: String,
}

/// Category with its products, as returned by the list and detail endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryReadDto {
    pub id: i64,
    pub title: String,
    pub products: Vec<Product>,
}
