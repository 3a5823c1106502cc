use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::data::context::AppContext;
use crate::system::auth::extractor::CurrentUser;
use crate::system::auth::jwt;
use crate::system::users::service::{self as user_service, Credentials};

/// Login handler.
///
/// An unknown email provisions its own account on first login; a known
/// email with a wrong password is rejected with 401 so the client can show
/// the failure instead of swallowing it.
pub async fn login(
    State(ctx): State<AppContext>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, StatusCode> {
    let user = match user_service::check_credentials(&ctx, &request.email, &request.password).await
    {
        Ok(Credentials::Valid(user)) => user,
        Ok(Credentials::WrongPassword) => return Err(StatusCode::UNAUTHORIZED),
        Ok(Credentials::UnknownEmail) => {
            match user_service::provision(&ctx, &request.email, &request.password).await {
                Ok(user) => user,
                Err(e) => {
                    tracing::warn!("Account provisioning failed for {}: {}", request.email, e);
                    return Err(StatusCode::UNPROCESSABLE_ENTITY);
                }
            }
        }
        Err(e) => {
            tracing::error!("Credential check failed: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let access_token = jwt::generate_access_token(&ctx, &user.id, &user.email)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let refresh_token = jwt::generate_refresh_token();

    store_refresh_token(&ctx, &user.id, &refresh_token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let response = LoginResponse {
        access_token,
        refresh_token,
        user: UserInfo {
            id: user.id,
            email: user.email,
        },
    };

    Ok(Json(response))
}

/// Refresh token handler
pub async fn refresh(
    State(ctx): State<AppContext>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, StatusCode> {
    let user_id = validate_refresh_token(&ctx, &request.refresh_token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    let user = user_service::get_by_id(&ctx, &user_id)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let access_token = jwt::generate_access_token(&ctx, &user.id, &user.email)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// Logout handler
pub async fn logout(
    State(ctx): State<AppContext>,
    Json(request): Json<RefreshRequest>,
) -> Result<StatusCode, StatusCode> {
    revoke_refresh_token(&ctx, &request.refresh_token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(StatusCode::OK)
}

/// Get current user handler (protected by middleware)
pub async fn current_user(
    State(ctx): State<AppContext>,
    CurrentUser(claims): CurrentUser,
) -> Result<Json<UserInfo>, StatusCode> {
    let user = user_service::get_by_id(&ctx, &claims.sub)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::NOT_FOUND)?;

    Ok(Json(UserInfo {
        id: user.id,
        email: user.email,
    }))
}

// Helper functions for refresh tokens

async fn store_refresh_token(ctx: &AppContext, user_id: &str, token: &str) -> anyhow::Result<()> {
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let token_id = uuid::Uuid::new_v4().to_string();
    let token_hash = hash_token(token);
    let expires_at = jwt::calculate_refresh_token_expiration();
    let created_at = Utc::now().to_rfc3339();

    ctx.db
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                token_id.into(),
                user_id.to_string().into(),
                token_hash.into(),
                expires_at.into(),
                created_at.into(),
            ],
        ))
        .await?;

    Ok(())
}

async fn validate_refresh_token(ctx: &AppContext, token: &str) -> anyhow::Result<String> {
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let token_hash = hash_token(token);
    let now = Utc::now().to_rfc3339();

    let result = ctx
        .db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [token_hash.into(), now.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let user_id: String = row.try_get("", "user_id")?;
            Ok(user_id)
        }
        None => Err(anyhow::anyhow!("Invalid or expired refresh token")),
    }
}

async fn revoke_refresh_token(ctx: &AppContext, token: &str) -> anyhow::Result<()> {
    use chrono::Utc;
    use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

    let token_hash = hash_token(token);
    let revoked_at = Utc::now().to_rfc3339();

    ctx.db
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ?",
            [revoked_at.into(), token_hash.into()],
        ))
        .await?;

    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
