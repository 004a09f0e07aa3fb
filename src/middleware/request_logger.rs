use crate::config::parameter;
use crate::response::envelope::ErrorContext;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info};

/// One info line per request, plus the normalizer's structured error line
/// when the response carries an `ErrorContext`. Nothing in here can fail,
/// so logging can never mask the response itself.
pub async fn log_request(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(default_origin);

    info!("path: {}, method: {}, origin: {}", path, method, origin);

    let response = next.run(req).await;

    if let Some(ctx) = response.extensions().get::<ErrorContext>() {
        error!(
            status_code = ctx.status_code.as_u16(),
            path = %path,
            error_type = ctx.error_type,
            error_message = %ctx.error_message,
            "request failed"
        );
    }

    response
}

fn default_origin() -> String {
    let host = parameter::get_optional("API_ADDRESS").unwrap_or_else(|| "localhost".to_string());
    let port = parameter::get_optional("API_PORT").unwrap_or_else(|| "4444".to_string());
    format!("http://{}:{}", host, port)
}
