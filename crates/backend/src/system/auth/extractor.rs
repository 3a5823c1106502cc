use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::TokenClaims;

/// The authenticated principal, pulled from the claims that `require_auth`
/// stashed in the request extensions.
pub struct CurrentUser(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<TokenClaims>() {
            Some(claims) => Ok(CurrentUser(claims.clone())),
            // Reachable only if a route forgot its require_auth layer
            None => Err(StatusCode::UNAUTHORIZED),
        }
    }
}
