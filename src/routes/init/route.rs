use axum::{Json, Router, http::StatusCode, routing::post};
use uuid::Uuid;

use super::dto::{InitRequest, InitResponse};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::repositories::UserRepository;
use crate::routes::users::dto::UserResponse;

pub fn create_route() -> Router {
    Router::new().route("/init", post(init_admin))
}

/// One-shot bootstrap of the first (and only) admin account.
#[utoipa::path(
    post,
    path = "/init",
    request_body = InitRequest,
    responses(
        (status = 201, description = "Admin created", body = InitResponse),
        (status = 400, description = "Missing fields or admin already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Init"
)]
pub async fn init_admin(
    Json(payload): Json<InitRequest>,
) -> Result<(StatusCode, Json<InitResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let email = payload.email.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    let user_repo = UserRepository::new();

    let existing_admin = user_repo
        .find_admin()
        .await
        .map_err(|e| ApiError::internal("Failed to create admin user", e))?;
    if existing_admin.is_some() {
        return Err(ApiError::bad_request("Admin already exists"));
    }

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::internal("Failed to create admin user", e))?;

    let admin = user_repo
        .create(
            Uuid::new_v4(),
            email,
            password_hash,
            payload.name,
            RoleEnum::Admin,
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create admin user", e))?;

    Ok((
        StatusCode::CREATED,
        Json(InitResponse {
            message: "Admin user created successfully".to_string(),
            user: UserResponse::from(admin),
        }),
    ))
}
