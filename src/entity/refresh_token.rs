use serde::{Deserialize, Serialize};

/// One row per issued refresh token. A user may own many live rows at once;
/// issuing a new pair never revokes earlier ones.
#[derive(Clone, Debug, Deserialize, Serialize, sqlx::FromRow)]
pub struct RefreshToken {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
    /// Expiry in epoch seconds, copied from the token's own `exp` claim.
    pub exp_at: i64,
}
