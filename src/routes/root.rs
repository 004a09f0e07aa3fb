use crate::config::database::Database;
use crate::config::jwt::JwtConfig;
use crate::config::parameter;
use crate::handler::home_handler;
use crate::middleware::auth as auth_guard;
use crate::middleware::request_logger;
use crate::routes::{auth, categories, favourites, products, users};
use crate::service::token_service::TokenService;
use crate::state::auth_state::AuthState;
use crate::state::catalog_state::CatalogState;
use crate::state::token_state::TokenState;
use crate::state::user_state::UserState;
use axum::routing::get;
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub fn routes(db_conn: Arc<Database>, jwt: JwtConfig) -> Router {
    let token_service = TokenService::new(jwt);
    let bcrypt_cost = parameter::get_u32("BCRYPT_COST");

    let auth_state = AuthState::new(&db_conn, token_service.clone());
    let token_state = TokenState::new(&db_conn, token_service);
    let user_state = UserState::new(&db_conn, bcrypt_cost);
    let catalog_state = CatalogState::new(&db_conn);

    let protected = Router::new()
        .merge(users::protected_routes(user_state.clone()))
        .merge(products::routes(catalog_state.clone()))
        .merge(categories::routes(catalog_state.clone()))
        .merge(favourites::routes(catalog_state))
        .layer(middleware::from_fn_with_state(token_state, auth_guard::auth));

    Router::new()
        .route("/", get(home_handler::home))
        .merge(auth::routes(auth_state))
        .merge(users::public_routes(user_state))
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logger::log_request)),
        )
}
