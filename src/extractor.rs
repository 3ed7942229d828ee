use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};

use crate::auth_token::{JwtManager, TokenClaims};
use crate::config::APP_CONFIG;

/// Extracts and validates the bearer token. Handlers take
/// `AuthClaims(claims)` to require authentication.
pub struct AuthClaims(pub TokenClaims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    (
                        StatusCode::UNAUTHORIZED,
                        "Missing or malformed Authorization header".to_string(),
                    )
                })?;

        let jwt_manager = JwtManager::new(APP_CONFIG.jwt_secret.clone());
        let claims = jwt_manager.verify_jwt(bearer.token()).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            )
        })?;

        Ok(AuthClaims(claims))
    }
}
