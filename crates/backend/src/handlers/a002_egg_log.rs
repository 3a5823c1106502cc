use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a002_egg_log::record::{CreateEggLogRequest, EggLog};

use crate::domain::a002_egg_log::service;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;
use crate::system::auth::jwt;

use super::{snapshot_stream, SubscribeQuery};

/// GET /api/eggs
pub async fn list_all(State(ctx): State<AppContext>) -> Result<Json<Vec<EggLog>>, StatusCode> {
    match service::list_all(&ctx).await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            tracing::error!("Failed to list egg records: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/eggs
pub async fn create(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateEggLogRequest>,
) -> Result<Json<EggLog>, StatusCode> {
    match service::create(&ctx, req).await {
        Ok(record) => Ok(Json(record)),
        Err(StoreError::Invalid(reason)) => {
            tracing::warn!("Rejected egg record: {}", reason);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => {
            tracing::error!("Failed to create egg record: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/eggs/subscribe (SSE; one full snapshot per change)
pub async fn subscribe(
    State(ctx): State<AppContext>,
    Query(query): Query<SubscribeQuery>,
) -> Response {
    if jwt::validate_token(&ctx, &query.token).await.is_err() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    snapshot_stream(ctx.channels.eggs.subscribe()).into_response()
}
