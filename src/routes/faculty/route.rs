use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use std::collections::HashMap;
use uuid::Uuid;

use super::dto::{CreateFacultyRequest, FacultyResponse, UpdateFacultyRequest};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{FacultyRepository, FacultyUpdate, ScheduleRepository};
use crate::routes::common::{AssignmentRow, SuccessResponse, claims_user_id, user_refs};

pub fn create_route() -> Router {
    Router::new()
        .route("/faculty", get(get_all_faculty))
        .route("/faculty", post(create_faculty))
        .route("/faculty/{faculty_id}", get(get_faculty))
        .route("/faculty/{faculty_id}", put(update_faculty))
        .route("/faculty/{faculty_id}", delete(delete_faculty))
}

/// All faculty members, name ascending, with their schedule assignments.
#[utoipa::path(
    get,
    path = "/faculty",
    responses(
        (status = 200, description = "Faculty members", body = [FacultyResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Faculty"
)]
pub async fn get_all_faculty() -> Result<(StatusCode, Json<Vec<FacultyResponse>>), ApiError> {
    let faculty = FacultyRepository::new()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch faculty members", e))?;

    let faculty_ids: Vec<Uuid> = faculty.iter().map(|f| f.id).collect();
    let assignments = ScheduleRepository::new()
        .find_by_faculty_ids(faculty_ids)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch faculty members", e))?;

    let mut by_faculty: HashMap<Uuid, Vec<AssignmentRow>> = HashMap::new();
    for assignment in assignments {
        by_faculty
            .entry(assignment.faculty_id)
            .or_default()
            .push(AssignmentRow::from(assignment));
    }

    let refs = user_refs(
        faculty
            .iter()
            .flat_map(|f| [f.created_by_id, f.updated_by_id]),
    )
    .await?;

    let response = faculty
        .into_iter()
        .map(|f| {
            let created_by = f.created_by_id.and_then(|id| refs.get(&id).cloned());
            let updated_by = f.updated_by_id.and_then(|id| refs.get(&id).cloned());
            let rows = by_faculty.remove(&f.id).unwrap_or_default();
            FacultyResponse::shape(f, created_by, updated_by, rows)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/faculty",
    request_body = CreateFacultyRequest,
    responses(
        (status = 201, description = "Faculty member created", body = FacultyResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthenticated"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Faculty"
)]
pub async fn create_faculty(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateFacultyRequest>,
) -> Result<(StatusCode, Json<FacultyResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;

    let faculty = FacultyRepository::new()
        .create(
            Uuid::new_v4(),
            payload.name.unwrap_or_default(),
            payload.rank.unwrap_or_default(),
            payload.department,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create faculty member", e))?;

    let refs = user_refs([faculty.created_by_id]).await?;
    let created_by = faculty.created_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::CREATED,
        Json(FacultyResponse::shape(faculty, created_by, None, Vec::new())),
    ))
}

#[utoipa::path(
    get,
    path = "/faculty/{faculty_id}",
    params(("faculty_id" = Uuid, Path, description = "Faculty member id")),
    responses(
        (status = 200, description = "Faculty member", body = FacultyResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Faculty"
)]
pub async fn get_faculty(
    Path(faculty_id): Path<Uuid>,
) -> Result<(StatusCode, Json<FacultyResponse>), ApiError> {
    let faculty = FacultyRepository::new()
        .find_by_id(faculty_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch faculty members", e))?
        .ok_or_else(|| ApiError::not_found("Faculty member not found"))?;

    let assignments = ScheduleRepository::new()
        .find_by_faculty_ids(vec![faculty.id])
        .await
        .map_err(|e| ApiError::internal("Failed to fetch faculty members", e))?
        .into_iter()
        .map(AssignmentRow::from)
        .collect();

    let refs = user_refs([faculty.created_by_id, faculty.updated_by_id]).await?;
    let created_by = faculty.created_by_id.and_then(|id| refs.get(&id).cloned());
    let updated_by = faculty.updated_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(FacultyResponse::shape(
            faculty, created_by, updated_by, assignments,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/faculty/{faculty_id}",
    params(("faculty_id" = Uuid, Path, description = "Faculty member id")),
    request_body = UpdateFacultyRequest,
    responses(
        (status = 200, description = "Faculty member updated", body = FacultyResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Faculty"
)]
pub async fn update_faculty(
    AuthClaims(claims): AuthClaims,
    Path(faculty_id): Path<Uuid>,
    Json(payload): Json<UpdateFacultyRequest>,
) -> Result<(StatusCode, Json<FacultyResponse>), ApiError> {
    let faculty_repo = FacultyRepository::new();
    faculty_repo
        .find_by_id(faculty_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update faculty member", e))?
        .ok_or_else(|| ApiError::not_found("Faculty member not found"))?;

    let faculty = faculty_repo
        .update(
            faculty_id,
            FacultyUpdate {
                name: payload.name,
                rank: payload.rank,
                department: payload.department,
                updated_by_id: claims_user_id(&claims),
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update faculty member", e))?;

    let refs = user_refs([faculty.created_by_id, faculty.updated_by_id]).await?;
    let created_by = faculty.created_by_id.and_then(|id| refs.get(&id).cloned());
    let updated_by = faculty.updated_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(FacultyResponse::shape(
            faculty,
            created_by,
            updated_by,
            Vec::new(),
        )),
    ))
}

/// Deletes the member and its schedule assignments atomically.
#[utoipa::path(
    delete,
    path = "/faculty/{faculty_id}",
    params(("faculty_id" = Uuid, Path, description = "Faculty member id")),
    responses(
        (status = 200, description = "Faculty member deleted", body = SuccessResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Faculty"
)]
pub async fn delete_faculty(
    AuthClaims(_claims): AuthClaims,
    Path(faculty_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let faculty_repo = FacultyRepository::new();
    faculty_repo
        .find_by_id(faculty_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete faculty member", e))?
        .ok_or_else(|| ApiError::not_found("Faculty member not found"))?;

    faculty_repo
        .delete_with_assignments(faculty_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete faculty member", e))?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}
