use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use std::collections::HashMap;
use uuid::Uuid;

use super::dto::{CreateExamRequest, ExamListQuery, ExamResponse, UpdateExamRequest};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{CourseRepository, ExamFilter, ExamRepository, ExamUpdate};
use crate::routes::common::{CourseRef, SuccessResponse, claims_user_id, user_refs};

pub fn create_route() -> Router {
    Router::new()
        .route("/exams", get(get_all_exams))
        .route("/exams", post(create_exam))
        .route("/exams/{exam_id}", get(get_exam))
        .route("/exams/{exam_id}", put(update_exam))
        .route("/exams/{exam_id}", delete(delete_exam))
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

/// Exams ordered by exam date, optionally filtered by course and section.
#[utoipa::path(
    get,
    path = "/exams",
    params(ExamListQuery),
    responses(
        (status = 200, description = "Exams", body = [ExamResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Exams"
)]
pub async fn get_all_exams(
    Query(query): Query<ExamListQuery>,
) -> Result<(StatusCode, Json<Vec<ExamResponse>>), ApiError> {
    let exams = ExamRepository::new()
        .find_all(ExamFilter {
            course_id: query.course_id,
            section: query.section,
        })
        .await
        .map_err(|e| ApiError::internal("Failed to fetch exams", e))?;

    let refs = user_refs(exams.iter().map(|e| e.created_by_id)).await?;
    let courses = course_refs(exams.iter().map(|e| e.course_id).collect()).await?;

    let response = exams
        .into_iter()
        .map(|e| {
            let created_by = e.created_by_id.and_then(|id| refs.get(&id).cloned());
            let course = courses.get(&e.course_id).cloned();
            ExamResponse::shape(e, created_by, course)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Admin only.
#[utoipa::path(
    post,
    path = "/exams",
    request_body = CreateExamRequest,
    responses(
        (status = 201, description = "Exam created", body = ExamResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Exams"
)]
pub async fn create_exam(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateExamRequest>,
) -> Result<(StatusCode, Json<ExamResponse>), ApiError> {
    if claims.role != RoleEnum::Admin {
        return Err(ApiError::forbidden("Only admins can create exams"));
    }
    payload.validate().map_err(ApiError::bad_request)?;

    let course_id = payload.course_id.unwrap_or_default();
    CourseRepository::new()
        .find_by_id(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create exam", e))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    let exam = ExamRepository::new()
        .create(
            Uuid::new_v4(),
            payload.title.unwrap_or_default(),
            course_id,
            payload.exam_date.unwrap_or_default(),
            payload.exam_type.unwrap_or_default(),
            payload.duration,
            payload.location,
            payload.section,
            payload.notes,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create exam", e))?;

    let refs = user_refs([exam.created_by_id]).await?;
    let created_by = exam.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![exam.course_id]).await?;
    let course = courses.get(&exam.course_id).cloned();

    Ok((
        StatusCode::CREATED,
        Json(ExamResponse::shape(exam, created_by, course)),
    ))
}

#[utoipa::path(
    get,
    path = "/exams/{exam_id}",
    params(("exam_id" = Uuid, Path, description = "Exam id")),
    responses(
        (status = 200, description = "Exam", body = ExamResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Exams"
)]
pub async fn get_exam(
    Path(exam_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ExamResponse>), ApiError> {
    let exam = ExamRepository::new()
        .find_by_id(exam_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch exams", e))?
        .ok_or_else(|| ApiError::not_found("Exam not found"))?;

    let refs = user_refs([exam.created_by_id]).await?;
    let created_by = exam.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![exam.course_id]).await?;
    let course = courses.get(&exam.course_id).cloned();

    Ok((
        StatusCode::OK,
        Json(ExamResponse::shape(exam, created_by, course)),
    ))
}

/// Admin only.
#[utoipa::path(
    put,
    path = "/exams/{exam_id}",
    params(("exam_id" = Uuid, Path, description = "Exam id")),
    request_body = UpdateExamRequest,
    responses(
        (status = 200, description = "Exam updated", body = ExamResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Exam or referenced course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Exams"
)]
pub async fn update_exam(
    AuthClaims(claims): AuthClaims,
    Path(exam_id): Path<Uuid>,
    Json(payload): Json<UpdateExamRequest>,
) -> Result<(StatusCode, Json<ExamResponse>), ApiError> {
    if claims.role != RoleEnum::Admin {
        return Err(ApiError::forbidden("Only admins can update exams"));
    }

    let exam_repo = ExamRepository::new();
    exam_repo
        .find_by_id(exam_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update exam", e))?
        .ok_or_else(|| ApiError::not_found("Exam not found"))?;

    if let Some(course_id) = payload.course_id {
        CourseRepository::new()
            .find_by_id(course_id)
            .await
            .map_err(|e| ApiError::internal("Failed to update exam", e))?
            .ok_or_else(|| ApiError::not_found("Course not found"))?;
    }

    let exam = exam_repo
        .update(
            exam_id,
            ExamUpdate {
                title: payload.title,
                course_id: payload.course_id,
                exam_date: payload.exam_date,
                exam_type: payload.exam_type,
                duration: payload.duration,
                location: payload.location,
                section: payload.section,
                notes: payload.notes,
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update exam", e))?;

    let refs = user_refs([exam.created_by_id]).await?;
    let created_by = exam.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(vec![exam.course_id]).await?;
    let course = courses.get(&exam.course_id).cloned();

    Ok((
        StatusCode::OK,
        Json(ExamResponse::shape(exam, created_by, course)),
    ))
}

/// Admin only.
#[utoipa::path(
    delete,
    path = "/exams/{exam_id}",
    params(("exam_id" = Uuid, Path, description = "Exam id")),
    responses(
        (status = 200, description = "Exam deleted", body = SuccessResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Exams"
)]
pub async fn delete_exam(
    AuthClaims(claims): AuthClaims,
    Path(exam_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    if claims.role != RoleEnum::Admin {
        return Err(ApiError::forbidden("Only admins can delete exams"));
    }

    let exam_repo = ExamRepository::new();
    exam_repo
        .find_by_id(exam_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete exam", e))?
        .ok_or_else(|| ApiError::not_found("Exam not found"))?;

    exam_repo
        .delete(exam_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete exam", e))?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}
