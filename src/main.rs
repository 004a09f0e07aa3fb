use crate::config::database::{Database, DatabaseTrait};
use crate::config::jwt::JwtConfig;
use crate::config::parameter;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod dto;
mod entity;
mod error;
mod handler;
mod middleware;
mod repository;
mod response;
mod routes;
mod service;
mod state;

#[tokio::main]
async fn main() {
    let filter = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    parameter::init();

    let db_conn = match Database::init().await {
        Ok(db) => Arc::new(db),
        Err(err) => {
            error!("Database initialization failed: {}", err);
            std::process::exit(1);
        }
    };

    let jwt = JwtConfig::from_parameters();

    let host = parameter::get("API_ADDRESS");
    let port = parameter::get("API_PORT");
    let addr = format!("{}:{}", host, port);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    info!("Server listening on {}", addr);

    let app = routes::root::routes(db_conn, jwt);

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", err);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(err) => error!("Failed to listen for shutdown signal: {}", err),
    }
}
