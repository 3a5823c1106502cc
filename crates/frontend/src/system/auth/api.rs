//! Calls against the backend auth endpoints plus the shared authenticated
//! request helpers the data pages use.

use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// POST an unauthenticated JSON body and parse the JSON reply
async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::post(&format!("{}{}", api_base(), path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Sign in; an unknown email provisions its account server-side
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    post_json("/api/system/auth/login", &LoginRequest { email, password }).await
}

pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, String> {
    post_json("/api/system/auth/refresh", &RefreshRequest { refresh_token }).await
}

/// Revoke the refresh token
pub async fn logout(refresh_token: String) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/system/auth/logout", api_base()))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }
    Ok(())
}

pub async fn get_current_user(access_token: &str) -> Result<UserInfo, String> {
    fetch_with_auth("/api/system/auth/me", access_token).await
}

/// GET with a bearer token
pub async fn fetch_with_auth<T>(path: &str, access_token: &str) -> Result<T, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&format!("{}{}", api_base(), path))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body with a bearer token
pub async fn post_json_with_auth<B, T>(
    path: &str,
    access_token: &str,
    body: &B,
) -> Result<T, String>
where
    B: serde::Serialize,
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::post(&format!("{}{}", api_base(), path))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
