use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_expense::record::{CreateExpenseRequest, Expense};

use crate::domain::a001_expense::service;
use crate::shared::data::context::AppContext;
use crate::shared::error::StoreError;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;

use super::{snapshot_stream, SubscribeQuery};

/// GET /api/expenses
pub async fn list_all(State(ctx): State<AppContext>) -> Result<Json<Vec<Expense>>, StatusCode> {
    match service::list_all(&ctx).await {
        Ok(records) => Ok(Json(records)),
        Err(e) => {
            tracing::error!("Failed to list expenses: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/expenses
pub async fn create(
    State(ctx): State<AppContext>,
    CurrentUser(claims): CurrentUser,
    Json(req): Json<CreateExpenseRequest>,
) -> Result<Json<Expense>, StatusCode> {
    match service::create(&ctx, req, Some(claims.sub)).await {
        Ok(record) => Ok(Json(record)),
        Err(StoreError::Invalid(reason)) => {
            tracing::warn!("Rejected expense: {}", reason);
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => {
            tracing::error!("Failed to create expense: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/expenses/subscribe (SSE; one full snapshot per change)
pub async fn subscribe(
    State(ctx): State<AppContext>,
    Query(query): Query<SubscribeQuery>,
) -> Response {
    if jwt::validate_token(&ctx, &query.token).await.is_err() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    snapshot_stream(ctx.channels.expenses.subscribe()).into_response()
}
