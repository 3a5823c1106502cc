use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::shared::data::context::AppContext;

/// Middleware that requires a valid JWT access token
pub async fn require_auth(
    State(ctx): State<AppContext>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = super::jwt::validate_token(&ctx, token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    // Make claims available to handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
