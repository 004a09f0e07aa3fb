use serde::{Deserialize, Serialize};

/// Favourite joined with the product it points at and that product's
/// category title.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavouriteReadDto {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub price: i64,
    pub category_id: i64,
    pub category_title: String,
}
