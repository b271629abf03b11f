use axum::{Json, Router, http::StatusCode, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::static_service::DATABASE_CONNECTION;

pub fn create_route() -> Router {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

/// Liveness probe, open to unauthenticated callers.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 500, description = "Database unreachable")
    ),
    tag = "Health"
)]
pub async fn health() -> Result<(StatusCode, Json<HealthResponse>), ApiError> {
    let db = DATABASE_CONNECTION
        .get()
        .ok_or_else(|| ApiError::internal("Database connection failed", "connection not set"))?;

    db.ping()
        .await
        .map_err(|e| ApiError::internal("Database connection failed", e))?;

    Ok((
        StatusCode::OK,
        Json(HealthResponse {
            message: "Database connection successful".to_string(),
        }),
    ))
}
