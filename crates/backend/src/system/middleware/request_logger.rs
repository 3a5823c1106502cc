use axum::{extract::Request, middleware::Next, response::Response};

/// Logs every request with status and timing
pub async fn request_logger(req: Request, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(
        "{} {} -> {} in {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}
