use crate::handler::favourite_handler;
use crate::state::catalog_state::CatalogState;
use axum::routing::{get, post};
use axum::Router;

pub fn routes(state: CatalogState) -> Router {
    Router::new()
        .route("/favourite", get(favourite_handler::find_all))
        .route(
            "/favourite/{product_id}",
            post(favourite_handler::add).delete(favourite_handler::delete),
        )
        .with_state(state)
}
