use crate::config::parameter;

/// Signing configuration for both token channels.
///
/// Access and refresh tokens use distinct secrets so that leaking one does
/// not compromise the other channel. Loaded once at startup and injected
/// into `TokenService` instead of being read from ambient state.
#[derive(Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
}

impl JwtConfig {
    pub fn from_parameters() -> Self {
        Self {
            access_secret: parameter::get("JWT_SECRET"),
            refresh_secret: parameter::get("JWT_REFRESH_SECRET"),
            access_ttl_minutes: parameter::get_i64("ACCESS_TOKEN_TTL_MINUTES"),
            refresh_ttl_days: parameter::get_i64("REFRESH_TOKEN_TTL_DAYS"),
        }
    }
}
