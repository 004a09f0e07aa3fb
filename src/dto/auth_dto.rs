use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(email(message = "email must be an email"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must be a string"))]
    pub password: String,
}

/// Body of `POST /auth/refresh`. The field is optional on the wire so a
/// missing value reaches the refresh protocol's own gate instead of failing
/// JSON deserialization.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenDto {
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TokenPairDto {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginDto").field("email", &self.email).finish()
    }
}

impl std::fmt::Debug for TokenPairDto {
    // Never expose token material in logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPairDto").finish_non_exhaustive()
    }
}
