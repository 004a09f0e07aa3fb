use crate::error::auth_error::AuthError;
use crate::error::ApiError;
use crate::repository::user_repository::UserRepositoryTrait;
use crate::state::token_state::TokenState;
use axum::extract::State;
use axum::http;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::IntoResponse;
use tracing::warn;

/// Access-token guard for protected routes. Unlike the refresh protocol,
/// this path fully verifies the token's signature and expiry, then loads
/// the user and hands it to the handler through request extensions.
pub async fn auth(
    State(state): State<TokenState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let token = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::Unauthorized)?;

    let claims = state.token_service.verify_access(token).map_err(|e| {
        warn!("Access token rejected: {}", e);
        AuthError::Unauthorized
    })?;

    let user = state.user_repo.find(claims.id).await.map_err(|_| {
        warn!("Access token subject not found: {}", claims.id);
        AuthError::Unauthorized
    })?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
