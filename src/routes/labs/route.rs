use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use std::collections::HashMap;
use uuid::Uuid;

use super::dto::{CreateLabRequest, LabListQuery, LabResponse, UpdateLabRequest};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{CourseRepository, LabFilter, LabRepository, LabUpdate};
use crate::routes::common::{CourseRef, SuccessResponse, claims_user_id, user_refs};

pub fn create_route() -> Router {
    Router::new()
        .route("/labs", get(get_all_labs))
        .route("/labs", post(create_lab))
        .route("/labs/{lab_id}", get(get_lab))
        .route("/labs/{lab_id}", put(update_lab))
        .route("/labs/{lab_id}", delete(delete_lab))
}

async fn course_refs(ids: Vec<Uuid>) -> Result<HashMap<Uuid, CourseRef>, ApiError> {
    let courses = CourseRepository::new()
        .find_by_ids(ids)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch courses", e))?;
    Ok(courses
        .into_iter()
        .map(|c| (c.id, CourseRef::from(c)))
        .collect())
}

/// Labs ordered by lab day, optionally filtered by course and section.
#[utoipa::path(
    get,
    path = "/labs",
    params(LabListQuery),
    responses(
        (status = 200, description = "Labs", body = [LabResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Labs"
)]
pub async fn get_all_labs(
    Query(query): Query<LabListQuery>,
) -> Result<(StatusCode, Json<Vec<LabResponse>>), ApiError> {
    let labs = LabRepository::new()
        .find_all(LabFilter {
            course_id: query.course_id,
            section: query.section,
        })
        .await
        .map_err(|e| ApiError::internal("Failed to fetch labs", e))?;

    let refs = user_refs(labs.iter().map(|l| l.created_by_id)).await?;
    let courses = course_refs(labs.iter().map(|l| l.course_id).collect()).await?;

    let response = labs
        .into_iter()
        .map(|l| {
            let created_by = l.created_by_id.and_then(|id| refs.get(&id).cloned());
            let course = courses.get(&l.course_id).cloned();
            LabResponse::shape(l, created_by, course)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Admin only.
#[utoipa::path(
    post,
    path = "/labs",
    request_body = CreateLabRequest,
    responses(
        (status = 201, description = "Lab created", body = LabResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Labs"
)]
pub async fn create_lab(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateLabRequest>,
) -> Result<(StatusCode, Json<LabResponse>), ApiError> {
    if claims.role != RoleEnum::Admin {
        return Err(ApiError::forbidden("Only admins can create labs"));
    }
    payload.validate().map_err(ApiError::bad_request)?;

    let course_id = payload.course_id.unwrap_or_default();
    CourseRepository::new()
        .find_by_id(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create lab", e))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    let lab = LabRepository::new()
        .create(
            Uuid::new_v4(),
            payload.name.unwrap_or_default(),
            course_id,
            payload.lab_day.unwrap_or_default(),
            payload.start_time.unwrap_or_default(),
            payload.end_time.unwrap_or_default(),
            payload.location,
            payload.capacity,
            payload.section,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create lab", e))?;

    let refs = user_refs([lab.created_by_id]).await?;
    let created_by = lab.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![lab.course_id]).await?;
    let course = courses.get(&lab.course_id).cloned();

    Ok((
        StatusCode::CREATED,
        Json(LabResponse::shape(lab, created_by, course)),
    ))
}

#[utoipa::path(
    get,
    path = "/labs/{lab_id}",
    params(("lab_id" = Uuid, Path, description = "Lab id")),
    responses(
        (status = 200, description = "Lab", body = LabResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Labs"
)]
pub async fn get_lab(Path(lab_id): Path<Uuid>) -> Result<(StatusCode, Json<LabResponse>), ApiError> {
    let lab = LabRepository::new()
        .find_by_id(lab_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch labs", e))?
        .ok_or_else(|| ApiError::not_found("Lab not found"))?;

    let refs = user_refs([lab.created_by_id]).await?;
    let created_by = lab.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![lab.course_id]).await?;
    let course = courses.get(&lab.course_id).cloned();

    Ok((
        StatusCode::OK,
        Json(LabResponse::shape(lab, created_by, course)),
    ))
}

/// Admin only.
#[utoipa::path(
    put,
    path = "/labs/{lab_id}",
    params(("lab_id" = Uuid, Path, description = "Lab id")),
    request_body = UpdateLabRequest,
    responses(
        (status = 200, description = "Lab updated", body = LabResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Lab or referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Labs"
)]
pub async fn update_lab(
    AuthClaims(claims): AuthClaims,
    Path(lab_id): Path<Uuid>,
    Json(payload): Json<UpdateLabRequest>,
) -> Result<(StatusCode, Json<LabResponse>), ApiError> {
    if claims.role != RoleEnum::Admin {
        return Err(ApiError::forbidden("Only admins can update labs"));
    }

    let lab_repo = LabRepository::new();
    lab_repo
        .find_by_id(lab_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update lab", e))?
        .ok_or_else(|| ApiError::not_found("Lab not found"))?;

    if let Some(course_id) = payload.course_id {
        CourseRepository::new()
            .find_by_id(course_id)
            .await
            .map_err(|e| ApiError::internal("Failed to update lab", e))?
            .ok_or_else(|| ApiError::not_found("Course not found"))?;
    }

    let lab = lab_repo
        .update(
            lab_id,
            LabUpdate {
                name: payload.name,
                course_id: payload.course_id,
                lab_day: payload.lab_day,
                start_time: payload.start_time,
                end_time: payload.end_time,
                location: payload.location,
                capacity: payload.capacity,
                section: payload.section,
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update lab", e))?;

    let refs = user_refs([lab.created_by_id]).await?;
    let created_by = lab.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![lab.course_id]).await?;
    let course = courses.get(&lab.course_id).cloned();

    Ok((
        StatusCode::OK,
        Json(LabResponse::shape(lab, created_by, course)),
    ))
}

/// Admin only.
#[utoipa::path(
    delete,
    path = "/labs/{lab_id}",
    params(("lab_id" = Uuid, Path, description = "Lab id")),
    responses(
        (status = 200, description = "Lab deleted", body = SuccessResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Labs"
)]
pub async fn delete_lab(
    AuthClaims(claims): AuthClaims,
    Path(lab_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    if claims.role != RoleEnum::Admin {
        return Err(ApiError::forbidden("Only admins can delete labs"));
    }

    let lab_repo = LabRepository::new();
    lab_repo
        .find_by_id(lab_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete lab", e))?
        .ok_or_else(|| ApiError::not_found("Lab not found"))?;

    lab_repo
        .delete(lab_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete lab", e))?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}
