use thiserror::Error;

/// Typed outcomes of the authentication gates. Raised at the point of
/// detection and carried unchanged to the normalizer; no intermediate layer
/// reinterprets them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; the response never distinguishes
    /// the two.
    #[error("Unauthorized")]
    InvalidCredentials,
    #[error("RefreshToken required")]
    MissingRefreshToken,
    #[error("Missing Bearer token")]
    MissingAuthHeader,
    #[error("Invalid or expired refresh token")]
    InvalidOrExpiredRefreshToken,
    /// The submitted refresh token is not stored for the user named by the
    /// old access token (forged, replayed after rotation, or cross-user).
    #[error("Refresh token does not belong to this user")]
    TokenOwnerMismatch,
    #[error("Unauthorized")]
    Unauthorized,
}
