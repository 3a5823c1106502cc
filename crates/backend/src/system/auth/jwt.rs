use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::context::AppContext;

const ACCESS_TOKEN_LIFETIME_HOURS: i64 = 24;
const REFRESH_TOKEN_LIFETIME_DAYS: i64 = 90;

/// Generate JWT access token with 24 hours lifetime
pub async fn generate_access_token(ctx: &AppContext, user_id: &str, email: &str) -> Result<String> {
    let now = Utc::now();
    let exp = (now + chrono::Duration::hours(ACCESS_TOKEN_LIFETIME_HOURS)).timestamp() as usize;
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp,
        iat,
    };

    let secret = get_jwt_secret(ctx).await?;
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")?;

    Ok(token)
}

/// Validate JWT token and extract claims
pub async fn validate_token(ctx: &AppContext, token: &str) -> Result<TokenClaims> {
    let secret = get_jwt_secret(ctx).await?;

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;

    Ok(token_data.claims)
}

/// Generate refresh token (UUID-based)
pub fn generate_refresh_token() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Get or create JWT secret from the settings table
pub async fn get_jwt_secret(ctx: &AppContext) -> Result<String> {
    match get_jwt_secret_from_db(ctx).await {
        Ok(Some(secret)) => Ok(secret),
        Ok(None) | Err(_) => {
            let secret = generate_jwt_secret();
            let _ = save_jwt_secret_to_db(ctx, &secret).await;
            Ok(secret)
        }
    }
}

/// Generate a cryptographically secure JWT secret (256 bits)
fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..32).map(|_| rng.gen::<u8>()).collect();
    general_purpose::STANDARD.encode(&random_bytes)
}

async fn get_jwt_secret_from_db(ctx: &AppContext) -> Result<Option<String>> {
    let result = ctx
        .db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            ["jwt_secret".into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let secret: String = row.try_get("", "value")?;
            Ok(Some(secret))
        }
        None => Ok(None),
    }
}

async fn save_jwt_secret_to_db(ctx: &AppContext, secret: &str) -> Result<()> {
    let now = Utc::now().to_rfc3339();

    ctx.db
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
            [
                "jwt_secret".into(),
                secret.to_string().into(),
                "Auto-generated JWT secret for authentication".into(),
                now.clone().into(),
                now.into(),
            ],
        ))
        .await?;

    Ok(())
}

/// Calculate refresh token expiration timestamp
pub fn calculate_refresh_token_expiration() -> String {
    let exp = Utc::now() + chrono::Duration::days(REFRESH_TOKEN_LIFETIME_DAYS);
    exp.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::context::test_context;

    #[tokio::test]
    async fn test_access_token_round_trip() {
        let ctx = test_context().await;
        let token = generate_access_token(&ctx, "u-1", "worker@farm.example")
            .await
            .unwrap();

        let claims = validate_token(&ctx, &token).await.unwrap();
        assert_eq!(claims.sub, "u-1");
        assert_eq!(claims.email, "worker@farm.example");
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let ctx = test_context().await;
        assert!(validate_token(&ctx, "not-a-token").await.is_err());
    }
}
