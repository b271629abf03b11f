use axum::{Json, Router, http::StatusCode, routing::post};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use super::dto::{ChangePasswordRequest, ChangePasswordResponse, LoginRequest};
use crate::config::{APP_CONFIG, SESSION_COOKIE_NAME, SESSION_EXPIRY_SECONDS};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::UserRepository;
use crate::routes::common::MessageResponse;
use crate::routes::users::dto::UserResponse;
use crate::utils::jwt::JwtManager;

pub fn create_route() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/change-password", post(change_password))
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Verify credentials and set the session cookie.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserResponse),
        (status = 400, description = "Missing credentials"),
        (status = 401, description = "Invalid credentials or inactive account"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<UserResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user = UserRepository::new()
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal("Failed to log in", e))?
        .ok_or_else(ApiError::unauthorized)?;

    let password_valid = bcrypt::verify(&password, &user.password)
        .map_err(|e| ApiError::internal("Failed to log in", e))?;
    if !password_valid || !user.is_active {
        return Err(ApiError::unauthorized());
    }

    let token = JwtManager::new(APP_CONFIG.session_secret.clone())
        .create_session_token(
            &user.id.to_string(),
            user.name.as_deref().unwrap_or(""),
            user.role.clone(),
            SESSION_EXPIRY_SECONDS,
        )
        .map_err(|e| ApiError::internal("Failed to log in", e))?;

    let jar = jar.add(session_cookie(token));
    Ok((jar, Json(UserResponse::from(user))))
}

/// Clear the session cookie.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE_NAME).path("/").build());
    (
        jar,
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// Change the calling admin's password after re-verifying the current one.
#[utoipa::path(
    post,
    path = "/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password updated", body = ChangePasswordResponse),
        (status = 400, description = "Missing fields or wrong current password"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn change_password(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<(StatusCode, Json<ChangePasswordResponse>), ApiError> {
    if claims.role != RoleEnum::Admin {
        return Err(ApiError::forbidden("Only admins can change passwords"));
    }
    payload.validate().map_err(ApiError::bad_request)?;
    let current_password = payload.current_password.unwrap_or_default();
    let new_password = payload.new_password.unwrap_or_default();

    let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| ApiError::unauthorized())?;
    let user_repo = UserRepository::new();

    let user = user_repo
        .find_by_id(user_id)
        .await
        .map_err(|e| ApiError::internal("Failed to change password", e))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let current_valid = bcrypt::verify(&current_password, &user.password)
        .map_err(|e| ApiError::internal("Failed to change password", e))?;
    if !current_valid {
        return Err(ApiError::bad_request("Current password is incorrect"));
    }

    let new_hash = bcrypt::hash(&new_password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::internal("Failed to change password", e))?;
    user_repo
        .update_password(user_id, new_hash)
        .await
        .map_err(|e| ApiError::internal("Failed to change password", e))?;

    Ok((
        StatusCode::OK,
        Json(ChangePasswordResponse {
            message: "Password updated successfully".to_string(),
            email: user.email,
        }),
    ))
}
