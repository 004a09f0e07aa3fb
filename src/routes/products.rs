use crate::handler::product_handler;
use crate::state::catalog_state::CatalogState;
use axum::routing::{get, post};
use axum::Router;

pub fn routes(state: CatalogState) -> Router {
    Router::new()
        .route("/product/create", post(product_handler::create))
        .route("/product", get(product_handler::find_all))
        .route(
            "/product/{id}",
            get(product_handler::find_one)
                .put(product_handler::update)
                .delete(product_handler::delete),
        )
        .with_state(state)
}
