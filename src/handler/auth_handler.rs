use crate::dto::auth_dto::{LoginDto, RefreshTokenDto, TokenPairDto};
use crate::error::auth_error::AuthError;
use crate::error::request_error::ValidatedRequest;
use crate::error::ApiError;
use crate::response::envelope::SuccessResponse;
use crate::state::auth_state::AuthState;
use axum::extract::State;
use axum::http;
use axum::http::HeaderMap;
use tracing::{info, warn};

/// Email/password login. Bad credentials are one undifferentiated 401;
/// the response never says whether the email exists.
pub async fn login(
    State(state): State<AuthState>,
    ValidatedRequest(payload): ValidatedRequest<LoginDto>,
) -> Result<SuccessResponse<TokenPairDto>, ApiError> {
    info!("Login attempt for email: {}", payload.email);

    let user = state
        .auth_service
        .validate_credentials(&payload.email, &payload.password)
        .await
        .ok_or_else(|| {
            warn!("Login failed for email: {}", payload.email);
            AuthError::InvalidCredentials
        })?;

    let pair = state.auth_service.issue_token_pair(&user).await?;
    Ok(SuccessResponse::send(pair))
}

/// Exchange an (old access token, refresh token) pair for a fresh pair.
pub async fn refresh(
    State(state): State<AuthState>,
    headers: HeaderMap,
    ValidatedRequest(payload): ValidatedRequest<RefreshTokenDto>,
) -> Result<SuccessResponse<TokenPairDto>, ApiError> {
    let authorization = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let pair = state
        .auth_service
        .refresh(authorization, payload.refresh_token.as_deref())
        .await?;
    Ok(SuccessResponse::send(pair))
}
