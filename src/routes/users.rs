use crate::handler::user_handler;
use crate::state::user_state::UserState;
use axum::routing::get;
use axum::routing::post;
use axum::Router;

pub fn public_routes(state: UserState) -> Router {
    Router::new()
        .route("/users/registration", post(user_handler::registration))
        .with_state(state)
}

pub fn protected_routes(state: UserState) -> Router {
    Router::new()
        .route("/users", get(user_handler::all))
        .route(
            "/users/me",
            get(user_handler::me).put(user_handler::update_me),
        )
        .route(
            "/users/verify/{activation_link}",
            get(user_handler::verify),
        )
        .route("/users/{id}", get(user_handler::find_one))
        .with_state(state)
}
