use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// The `error` member of the envelope. A successful response always carries
/// `{message: "", code: 0}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u32,
}

impl ErrorBody {
    pub fn none() -> Self {
        Self { message: String::new(), code: 0 }
    }
}

/// Uniform wire shape for every endpoint: `{result, error, data}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Envelope<T> {
    pub result: bool,
    pub error: ErrorBody,
    pub data: T,
}

/// Success response with default 200 OK status
#[derive(Clone, Debug)]
pub struct SuccessResponse<T> {
    pub envelope: Envelope<T>,
    pub status_code: StatusCode,
}

impl<T> SuccessResponse<T> {
    pub fn send(data: T) -> Self {
        Self {
            envelope: Envelope {
                result: true,
                error: ErrorBody::none(),
                data,
            },
            status_code: StatusCode::OK,
        }
    }

    /// Set custom status code (builder pattern)
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }
}

impl<T> IntoResponse for SuccessResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.status_code, Json(self.envelope)).into_response()
    }
}

/// Error response; `data` is always the empty object.
#[derive(Clone, Debug)]
pub struct ErrorResponse {
    pub envelope: Envelope<serde_json::Value>,
    pub status_code: StatusCode,
    pub context: ErrorContext,
}

/// Carried on the response as an extension so the request-logging middleware
/// can emit the structured error line with the request path attached.
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub status_code: StatusCode,
    pub error_type: &'static str,
    pub error_message: String,
}

impl ErrorResponse {
    pub fn send(message: String, code: u32) -> Self {
        let context = ErrorContext {
            status_code: StatusCode::BAD_REQUEST,
            error_type: "Error",
            error_message: message.clone(),
        };
        Self {
            envelope: Envelope {
                result: false,
                error: ErrorBody { message, code },
                data: serde_json::json!({}),
            },
            status_code: StatusCode::BAD_REQUEST,
            context,
        }
    }

    /// Set custom status code (builder pattern)
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self.context.status_code = status_code;
        self
    }

    pub fn with_error_type(mut self, error_type: &'static str) -> Self {
        self.context.error_type = error_type;
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status_code, Json(self.envelope)).into_response();
        response.extensions_mut().insert(self.context);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_empty_error() {
        let response = SuccessResponse::send(serde_json::json!({"ok": 1}));
        assert!(response.envelope.result);
        assert_eq!(response.envelope.error.code, 0);
        assert_eq!(response.envelope.error.message, "");
        assert_eq!(response.status_code, StatusCode::OK);
    }

    #[test]
    fn error_envelope_carries_message_code_and_empty_data() {
        let response = ErrorResponse::send("Unauthorized".to_string(), 1008)
            .with_status(StatusCode::UNAUTHORIZED);
        assert!(!response.envelope.result);
        assert_eq!(response.envelope.error.code, 1008);
        assert_eq!(response.envelope.error.message, "Unauthorized");
        assert_eq!(response.envelope.data, serde_json::json!({}));
        assert_eq!(response.status_code, StatusCode::UNAUTHORIZED);
        assert_eq!(response.context.status_code, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn envelope_wire_shape() {
        let response = SuccessResponse::send(serde_json::json!({"access_token": "a"}));
        let body = serde_json::to_value(&response.envelope).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "result": true,
                "error": {"message": "", "code": 0},
                "data": {"access_token": "a"}
            })
        );
    }
}
