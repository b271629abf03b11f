use axum::{Json, Router, http::StatusCode, routing::post};
use uuid::Uuid;

use super::dto::{RegisterUserRequest, UserResponse};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::repositories::UserRepository;

pub fn create_route() -> Router {
    Router::new().route("/users/register", post(register_user))
}

/// Self-service registration. Open, but the admin role is only granted
/// while no admin account exists yet.
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing fields or duplicate email"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn register_user(
    Json(payload): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();
    let role = payload.role.unwrap_or(RoleEnum::User);

    let user_repo = UserRepository::new();

    let existing = user_repo
        .find_by_email(&email)
        .await
        .map_err(|e| ApiError::internal("Failed to create user", e))?;
    if existing.is_some() {
        return Err(ApiError::bad_request("User already exists"));
    }

    if role == RoleEnum::Admin {
        let admin = user_repo
            .find_admin()
            .await
            .map_err(|e| ApiError::internal("Failed to create user", e))?;
        if admin.is_some() {
            return Err(ApiError::bad_request(
                "Admin already exists. Use the init endpoint to create the first admin.",
            ));
        }
    }

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::internal("Failed to create user", e))?;

    let user = user_repo
        .create(Uuid::new_v4(), email, password_hash, payload.name, role)
        .await
        .map_err(|e| ApiError::internal("Failed to create user", e))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
