use crate::handler::category_handler;
use crate::state::catalog_state::CatalogState;
use axum::routing::{delete, get};
use axum::Router;

pub fn routes(state: CatalogState) -> Router {
    Router::new()
        .route(
            "/category",
            get(category_handler::find_all).post(category_handler::create),
        )
        .route("/category/{id}", delete(category_handler::delete))
        .with_state(state)
}
