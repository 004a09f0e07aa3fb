use thiserror::Error;

/// Failures inside the token issuer/verifier itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token error: {0}")]
    CreationFailed(String),
    #[error("Invalid token")]
    Invalid,
    #[error("Token has expired")]
    Expired,
    /// The token decoded but carried no usable expiry claim; treated as an
    /// internal error because we only mint tokens with `exp` set.
    #[error("Token is missing an expiry claim")]
    MissingExpiry,
}
