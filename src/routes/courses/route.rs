use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use std::collections::HashMap;
use uuid::Uuid;

use super::dto::{CourseListQuery, CourseResponse, CreateCourseRequest, UpdateCourseRequest};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{CourseFilter, CourseRepository, CourseUpdate, ScheduleRepository};
use crate::routes::common::{AssignmentRow, SuccessResponse, claims_user_id, user_refs};

pub fn create_route() -> Router {
    Router::new()
        .route("/courses", get(get_all_courses))
        .route("/courses", post(create_course))
        .route("/courses/{course_id}", get(get_course))
        .route("/courses/{course_id}", put(update_course))
        .route("/courses/{course_id}", delete(delete_course))
}

/// Courses ordered by (year, semester, code), optionally filtered.
#[utoipa::path(
    get,
    path = "/courses",
    params(CourseListQuery),
    responses(
        (status = 200, description = "Courses", body = [CourseResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_all_courses(
    Query(query): Query<CourseListQuery>,
) -> Result<(StatusCode, Json<Vec<CourseResponse>>), ApiError> {
    let courses = CourseRepository::new()
        .find_all(CourseFilter {
            year: query.year,
            semester: query.semester,
        })
        .await
        .map_err(|e| ApiError::internal("Failed to fetch courses", e))?;

    let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();
    let assignments = ScheduleRepository::new()
        .find_by_course_ids(course_ids)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch courses", e))?;

    let mut by_course: HashMap<Uuid, Vec<AssignmentRow>> = HashMap::new();
    for assignment in assignments {
        by_course
            .entry(assignment.course_id)
            .or_default()
            .push(AssignmentRow::from(assignment));
    }

    let refs = user_refs(
        courses
            .iter()
            .flat_map(|c| [c.created_by_id, c.updated_by_id]),
    )
    .await?;

    let response = courses
        .into_iter()
        .map(|c| {
            let created_by = c.created_by_id.and_then(|id| refs.get(&id).cloned());
            let updated_by = c.updated_by_id.and_then(|id| refs.get(&id).cloned());
            let rows = by_course.remove(&c.id).unwrap_or_default();
            CourseResponse::shape(c, created_by, updated_by, rows)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthenticated"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;

    let course = CourseRepository::new()
        .create(
            Uuid::new_v4(),
            payload.code.unwrap_or_default(),
            payload.name.unwrap_or_default(),
            payload.hours.unwrap_or_default(),
            payload.year.unwrap_or_default(),
            payload.semester.unwrap_or_default(),
            payload.section,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create course", e))?;

    let refs = user_refs([course.created_by_id]).await?;
    let created_by = course.created_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::CREATED,
        Json(CourseResponse::shape(course, created_by, None, Vec::new())),
    ))
}

#[utoipa::path(
    get,
    path = "/courses/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course", body = CourseResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn get_course(
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let course_repo = CourseRepository::new();
    let course = course_repo
        .find_by_id(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch courses", e))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    let assignments = course_repo
        .assignments_for_course(course.id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch courses", e))?
        .into_iter()
        .map(AssignmentRow::from)
        .collect();

    let refs = user_refs([course.created_by_id, course.updated_by_id]).await?;
    let created_by = course.created_by_id.and_then(|id| refs.get(&id).cloned());
    let updated_by = course.updated_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(CourseResponse::shape(
            course, created_by, updated_by, assignments,
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/courses/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    AuthClaims(claims): AuthClaims,
    Path(course_id): Path<Uuid>,
    Json(payload): Json<UpdateCourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), ApiError> {
    let course_repo = CourseRepository::new();
    course_repo
        .find_by_id(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update course", e))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    let course = course_repo
        .update(
            course_id,
            CourseUpdate {
                code: payload.code,
                name: payload.name,
                hours: payload.hours,
                year: payload.year,
                semester: payload.semester,
                section: payload.section,
                updated_by_id: claims_user_id(&claims),
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update course", e))?;

    let refs = user_refs([course.created_by_id, course.updated_by_id]).await?;
    let created_by = course.created_by_id.and_then(|id| refs.get(&id).cloned());
    let updated_by = course.updated_by_id.and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(CourseResponse::shape(
            course,
            created_by,
            updated_by,
            Vec::new(),
        )),
    ))
}

/// Deletes the course and its schedule assignments atomically.
#[utoipa::path(
    delete,
    path = "/courses/{course_id}",
    params(("course_id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course deleted", body = SuccessResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    AuthClaims(_claims): AuthClaims,
    Path(course_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let course_repo = CourseRepository::new();
    course_repo
        .find_by_id(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete course", e))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    course_repo
        .delete_with_assignments(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete course", e))?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}
