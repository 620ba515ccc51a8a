use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Log every request with a generated request id
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if status.is_success() {
        tracing::info!(%request_id, %method, %path, status = status.as_u16(), %size, elapsed_ms, "request");
    } else {
        tracing::warn!(%request_id, %method, %path, status = status.as_u16(), %size, elapsed_ms, "request failed");
    }

    response
}
