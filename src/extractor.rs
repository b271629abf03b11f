use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use crate::config::{APP_CONFIG, SESSION_COOKIE_NAME};
use crate::error::ApiError;
use crate::utils::jwt::{JwtManager, TokenClaims};

/// Resolves the caller's identity from the session cookie. Tokens are only
/// accepted from the cookie, never from headers.
pub struct AuthClaims(pub TokenClaims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(SESSION_COOKIE_NAME)
            .ok_or_else(ApiError::unauthorized)?;

        let claims = JwtManager::new(APP_CONFIG.session_secret.clone())
            .verify_token(cookie.value())
            .map_err(|_| ApiError::unauthorized())?;

        Ok(AuthClaims(claims))
    }
}
