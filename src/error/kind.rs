use axum::http::StatusCode;

/// One row of the error table: log label, wire message, numeric code and
/// HTTP status.
#[derive(Clone, Copy, Debug)]
pub struct ErrorEntry {
    pub name: &'static str,
    pub message: &'static str,
    pub code: u32,
    pub status: StatusCode,
}

/// Message prefix used by the generic `Caught` kind, which echoes the
/// original failure text for diagnostics.
pub const CAUGHT_PREFIX: &str = "The next error was caught: ";

/// Closed set of failure categories. Each kind resolves to a fixed
/// message/code/status triple at compile time, so an unknown kind is a type
/// error rather than a missing map entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fallback for any failure without a dedicated kind; the wire message
    /// is `CAUGHT_PREFIX` followed by the original message.
    Caught,
    NotFound,
    StorageUnknown,
    StorageValidation,
    StoragePanic,
    StorageInit,
    Unauthorized,
    Conflict,
    BadRequest,
    ExternalRequest,
}

impl ErrorKind {
    pub const fn entry(self) -> ErrorEntry {
        match self {
            ErrorKind::Caught => ErrorEntry {
                name: "Error",
                message: CAUGHT_PREFIX,
                code: 1000,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            ErrorKind::NotFound => ErrorEntry {
                name: "Not Found",
                message: "Not found",
                code: 1001,
                status: StatusCode::NOT_FOUND,
            },
            ErrorKind::StorageUnknown => ErrorEntry {
                name: "Storage Error",
                message: "Storage error",
                code: 1002,
                status: StatusCode::BAD_GATEWAY,
            },
            ErrorKind::StorageValidation => ErrorEntry {
                name: "Storage Validation Error",
                message: "Storage validation error",
                code: 1003,
                status: StatusCode::BAD_REQUEST,
            },
            ErrorKind::StoragePanic => ErrorEntry {
                name: "Storage Panic",
                message: "Storage engine failure",
                code: 1004,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            ErrorKind::StorageInit => ErrorEntry {
                name: "Storage Initialization Error",
                message: "Storage initialization failed",
                code: 1005,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
            ErrorKind::Unauthorized => ErrorEntry {
                name: "Unauthorized",
                message: "Unauthorized",
                code: 1008,
                status: StatusCode::UNAUTHORIZED,
            },
            ErrorKind::Conflict => ErrorEntry {
                name: "Conflict",
                message: "Unique constraint failed on the ",
                code: 1009,
                status: StatusCode::CONFLICT,
            },
            ErrorKind::BadRequest => ErrorEntry {
                name: "Bad Request",
                message: "Bad Request",
                code: 1011,
                status: StatusCode::BAD_REQUEST,
            },
            ErrorKind::ExternalRequest => ErrorEntry {
                name: "External request failed",
                message: CAUGHT_PREFIX,
                code: 1000,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_stable() {
        assert_eq!(ErrorKind::Unauthorized.entry().code, 1008);
        assert_eq!(ErrorKind::Unauthorized.entry().status, StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Conflict.entry().code, 1009);
        assert_eq!(ErrorKind::Conflict.entry().status, StatusCode::CONFLICT);
        assert_eq!(ErrorKind::NotFound.entry().code, 1001);
        assert_eq!(ErrorKind::BadRequest.entry().code, 1011);
        assert_eq!(ErrorKind::Caught.entry().code, 1000);
        assert_eq!(ErrorKind::StoragePanic.entry().status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
