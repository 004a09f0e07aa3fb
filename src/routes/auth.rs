use crate::handler::auth_handler;
use crate::state::auth_state::AuthState;
use axum::routing::post;
use axum::Router;

/// Login and refresh are public. The refresh handler inspects the
/// Authorization header itself, so it must not sit behind the guard that
/// rejects expired access tokens.
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/auth/login", post(auth_handler::login))
        .route("/auth/refresh", post(auth_handler::refresh))
        .with_state(state)
}
