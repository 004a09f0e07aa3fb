use crate::error::ApiError;
use axum::extract::{rejection::JsonRejection, FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::warn;
use validator::Validate;

/// JSON extractor that runs DTO validation before the handler sees the
/// payload. Shape errors and field-level failures both surface as
/// `ApiError`, so the normalizer is the only place envelopes are built.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedRequest<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedRequest<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                warn!("Request body rejected: {}", rejection.body_text());
                ApiError::BadRequest
            })?;
        value
            .validate()
            .map_err(|errors| ApiError::Validation(collect_messages(errors)))?;
        Ok(ValidatedRequest(value))
    }
}

/// Flattens validator output into the per-field message list the normalizer
/// joins into one "bad input" line.
pub fn collect_messages(errors: validator::ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors
                .iter()
                .map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid", field),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Deserialize, Validate)]
    struct Probe {
        #[validate(email(message = "email must be an email"))]
        email: String,
    }

    #[test]
    fn messages_come_from_dto_annotations() {
        let probe = Probe { email: "not-an-email".to_string() };
        let errors = probe.validate().unwrap_err();
        assert_eq!(collect_messages(errors), vec!["email must be an email".to_string()]);
    }
}
