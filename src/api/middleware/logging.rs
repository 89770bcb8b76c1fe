use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

pub async fn request_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let has_credentials = request.headers().contains_key(header::AUTHORIZATION);
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let challenged = response.headers().contains_key(header::WWW_AUTHENTICATE);

    if status.is_client_error() || status.is_server_error() {
        warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            has_credentials,
            challenged,
            duration_ms = %duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            has_credentials,
            duration_ms = %duration.as_millis(),
            "Request completed"
        );
    }

    response
}
