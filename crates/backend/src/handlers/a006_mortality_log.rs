use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a006_mortality_log::record::{CreateMortalityLogRequest, MortalityLog};

use crate::domain::a006_mortality_log::service;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;
use crate::system::auth::jwt;

use super::{snapshot_stream, SubscribeQuery};

/// GET /api/mortality
pub async fn list_all(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<MortalityLog>>, StatusCode> {
    match service::list_all(&ctx).await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            tracing::error!("Failed to list mortality reports: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/mortality
pub async fn create(
    State(ctx): State<AppContext>,
    Json(req): Json<CreateMortalityLogRequest>,
) -> Result<Json<MortalityLog>, StatusCode> {
    match service::create(&ctx, req).await {
        Ok(record) => Ok(Json(record)),
        Err(StoreError::Invalid(reason)) => {
            tracing::warn!("Rejected mortality report: {}", reason);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => {
            tracing::error!("Failed to create mortality report: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/mortality/subscribe (SSE; one full snapshot per change)
pub async fn subscribe(
    State(ctx): State<AppContext>,
    Query(query): Query<SubscribeQuery>,
) -> Response {
    if jwt::validate_token(&ctx, &query.token).await.is_err() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    snapshot_stream(ctx.channels.mortality.subscribe()).into_response()
}
