use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct Favourite {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
}
