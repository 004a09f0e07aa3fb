pub(crate) mod auth_error;
pub(crate) mod kind;
pub(crate) mod request_error;
pub(crate) mod storage_error;
pub(crate) mod token_error;

use crate::error::auth_error::AuthError;
use crate::error::kind::{ErrorKind, CAUGHT_PREFIX};
use crate::error::storage_error::StorageError;
use crate::error::token_error::TokenError;
use crate::response::envelope::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Unified application error. Every failure in the system flows through
/// this type to a single normalization point at the response boundary;
/// handlers never build error envelopes themselves.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Input-shape failure carrying per-field messages.
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    /// Request body rejected before a DTO could be produced (malformed or
    /// missing JSON).
    #[error("Bad Request")]
    BadRequest,
    /// A failure that already carries its own HTTP status (the framework
    /// rejected the request before business logic ran).
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    /// Anything else; the original message is echoed behind the generic
    /// prefix as an accepted diagnostic trade-off.
    #[error("{0}")]
    Unknown(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Storage(StorageError::from(err))
    }
}

/// Result of classifying a failure against the error table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Normalized {
    pub status: StatusCode,
    pub code: u32,
    pub message: String,
    pub error_type: &'static str,
}

fn verbatim(kind: ErrorKind) -> Normalized {
    let entry = kind.entry();
    Normalized {
        status: entry.status,
        code: entry.code,
        message: entry.message.to_string(),
        error_type: entry.name,
    }
}

fn caught(status: StatusCode, message: &str) -> Normalized {
    let entry = ErrorKind::Caught.entry();
    Normalized {
        status,
        code: entry.code,
        message: format!("{}{}", CAUGHT_PREFIX, message),
        error_type: entry.name,
    }
}

/// Numeric status embedded in an outbound-call failure message, e.g.
/// "Request failed with status code 503".
fn embedded_status(message: &str) -> Option<StatusCode> {
    let rest = message.strip_prefix("Request failed with status code ")?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    StatusCode::from_u16(digits.parse().ok()?).ok()
}

impl ApiError {
    /// Ordered classification, first match wins:
    /// 1. typed kinds with a static table entry,
    /// 2. structured validation failures,
    /// 3. the literal "Unauthorized" message,
    /// 4. outbound failures with an embedded HTTP status,
    /// 5. the generic fallback (original message behind a fixed prefix).
    pub fn normalize(&self) -> Normalized {
        match self {
            ApiError::Auth(err) => match err {
                AuthError::MissingRefreshToken => {
                    caught(StatusCode::BAD_REQUEST, "RefreshToken required")
                }
                AuthError::InvalidCredentials
                | AuthError::MissingAuthHeader
                | AuthError::InvalidOrExpiredRefreshToken
                | AuthError::TokenOwnerMismatch
                | AuthError::Unauthorized => verbatim(ErrorKind::Unauthorized),
            },
            ApiError::Token(err) => match err {
                TokenError::Invalid | TokenError::Expired => verbatim(ErrorKind::Unauthorized),
                TokenError::CreationFailed(_) | TokenError::MissingExpiry => {
                    caught(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
                }
            },
            ApiError::Storage(err) => match err {
                StorageError::UniqueViolation { .. } => {
                    let entry = ErrorKind::Conflict.entry();
                    Normalized {
                        status: entry.status,
                        code: entry.code,
                        message: err.to_string(),
                        error_type: entry.name,
                    }
                }
                StorageError::RowNotFound => verbatim(ErrorKind::NotFound),
                StorageError::Validation(_) => verbatim(ErrorKind::StorageValidation),
                StorageError::Panic(_) => verbatim(ErrorKind::StoragePanic),
                StorageError::Init(_) => verbatim(ErrorKind::StorageInit),
                StorageError::Unknown(_) => verbatim(ErrorKind::StorageUnknown),
            },
            ApiError::NotFound { .. } => verbatim(ErrorKind::NotFound),
            ApiError::BadRequest => verbatim(ErrorKind::BadRequest),
            ApiError::Validation(messages) => {
                let mut normalized = caught(StatusCode::BAD_REQUEST, &messages.join(" "));
                normalized.error_type = "Validation Error";
                normalized
            }
            ApiError::Http { status, message } => {
                if message == "Unauthorized" {
                    verbatim(ErrorKind::Unauthorized)
                } else {
                    caught(*status, message)
                }
            }
            ApiError::Unknown(message) => {
                if message == "Unauthorized" {
                    verbatim(ErrorKind::Unauthorized)
                } else if let Some(status) = embedded_status(message) {
                    let mut normalized = caught(status, message);
                    normalized.error_type = ErrorKind::ExternalRequest.entry().name;
                    normalized
                } else {
                    caught(StatusCode::INTERNAL_SERVER_ERROR, message)
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let normalized = self.normalize();
        ErrorResponse::send(normalized.message, normalized.code)
            .with_status(normalized.status)
            .with_error_type(normalized.error_type)
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_variants_share_one_entry() {
        for err in [
            AuthError::InvalidCredentials,
            AuthError::MissingAuthHeader,
            AuthError::InvalidOrExpiredRefreshToken,
            AuthError::TokenOwnerMismatch,
            AuthError::Unauthorized,
        ] {
            let normalized = ApiError::Auth(err).normalize();
            assert_eq!(normalized.status, StatusCode::UNAUTHORIZED);
            assert_eq!(normalized.code, 1008);
            assert_eq!(normalized.message, "Unauthorized");
        }
    }

    #[test]
    fn missing_refresh_token_is_a_400_with_caught_prefix() {
        let normalized = ApiError::Auth(AuthError::MissingRefreshToken).normalize();
        assert_eq!(normalized.status, StatusCode::BAD_REQUEST);
        assert_eq!(normalized.code, 1000);
        assert!(normalized.message.contains("RefreshToken required"));
    }

    #[test]
    fn unique_violation_names_the_fields() {
        let err = ApiError::Storage(StorageError::UniqueViolation {
            fields: vec!["email".to_string()],
        });
        let normalized = err.normalize();
        assert_eq!(normalized.status, StatusCode::CONFLICT);
        assert_eq!(normalized.code, 1009);
        assert_eq!(normalized.message, "Unique constraint failed on the email");
    }

    #[test]
    fn validation_messages_are_joined() {
        let err = ApiError::Validation(vec![
            "email must be an email".to_string(),
            "password must be longer than or equal to 8 characters".to_string(),
        ]);
        let normalized = err.normalize();
        assert_eq!(normalized.status, StatusCode::BAD_REQUEST);
        assert_eq!(normalized.code, 1000);
        assert_eq!(
            normalized.message,
            "The next error was caught: email must be an email password must be longer than or equal to 8 characters"
        );
        assert_eq!(normalized.error_type, "Validation Error");
    }

    #[test]
    fn malformed_body_is_a_bad_request() {
        let normalized = ApiError::BadRequest.normalize();
        assert_eq!(normalized.status, StatusCode::BAD_REQUEST);
        assert_eq!(normalized.code, 1011);
        assert_eq!(normalized.message, "Bad Request");
    }

    #[test]
    fn literal_unauthorized_message_is_normalized() {
        let normalized = ApiError::Unknown("Unauthorized".to_string()).normalize();
        assert_eq!(normalized.status, StatusCode::UNAUTHORIZED);
        assert_eq!(normalized.code, 1008);
    }

    #[test]
    fn embedded_status_is_extracted() {
        let err = ApiError::Unknown("Request failed with status code 503".to_string());
        let normalized = err.normalize();
        assert_eq!(normalized.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(normalized.error_type, "External request failed");
    }

    #[test]
    fn generic_fallback_echoes_message_behind_prefix() {
        let normalized = ApiError::Unknown("boom".to_string()).normalize();
        assert_eq!(normalized.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(normalized.code, 1000);
        assert_eq!(normalized.message, "The next error was caught: boom");
    }

    #[test]
    fn http_errors_keep_their_declared_status() {
        let err = ApiError::Http {
            status: StatusCode::BAD_REQUEST,
            message: "RefreshToken required".to_string(),
        };
        let normalized = err.normalize();
        assert_eq!(normalized.status, StatusCode::BAD_REQUEST);
        assert_eq!(normalized.message, "The next error was caught: RefreshToken required");
    }

    #[test]
    fn storage_kinds_map_to_distinct_entries() {
        let cases = [
            (StorageError::RowNotFound, StatusCode::NOT_FOUND, 1001),
            (StorageError::Validation("bad column".into()), StatusCode::BAD_REQUEST, 1003),
            (StorageError::Panic("pool".into()), StatusCode::INTERNAL_SERVER_ERROR, 1004),
            (StorageError::Init("config".into()), StatusCode::INTERNAL_SERVER_ERROR, 1005),
            (StorageError::Unknown("other".into()), StatusCode::BAD_GATEWAY, 1002),
        ];
        for (err, status, code) in cases {
            let normalized = ApiError::Storage(err).normalize();
            assert_eq!(normalized.status, status);
            assert_eq!(normalized.code, code);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let err = ApiError::Auth(AuthError::TokenOwnerMismatch);
        assert_eq!(err.normalize(), err.normalize());
    }
}
