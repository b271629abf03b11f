use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{delete, get, post},
};
use uuid::Uuid;

use super::dto::{CreateScheduleRequest, ScheduleListQuery, ScheduleResponse};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{
    CourseRepository, FacultyRepository, ScheduleFilter, ScheduleRepository,
};
use crate::routes::common::{
    CourseRef, FacultyRef, SuccessResponse, claims_user_id, user_refs,
};

pub fn create_route() -> Router {
    Router::new()
        .route("/schedule", get(get_all_assignments))
        .route("/schedule", post(create_assignment))
        .route("/schedule/{assignment_id}", delete(delete_assignment))
}

/// Assignments newest first with faculty and course projections.
#[utoipa::path(
    get,
    path = "/schedule",
    params(ScheduleListQuery),
    responses(
        (status = 200, description = "Schedule assignments", body = [ScheduleResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedule"
)]
pub async fn get_all_assignments(
    Query(query): Query<ScheduleListQuery>,
) -> Result<(StatusCode, Json<Vec<ScheduleResponse>>), ApiError> {
    let rows = ScheduleRepository::new()
        .find_all(ScheduleFilter {
            academic_year: query.year,
        })
        .await
        .map_err(|e| ApiError::internal("Failed to fetch schedule assignments", e))?;

    // Course semester is not a column on the assignment, so the semester
    // filter applies after the join.
    let rows: Vec<_> = match query.semester {
        Some(semester) => rows
            .into_iter()
            .filter(|(_, _, course)| course.as_ref().is_some_and(|c| c.semester == semester))
            .collect(),
        None => rows,
    };

    let refs = user_refs(rows.iter().map(|(a, _, _)| a.created_by_id)).await?;

    let response = rows
        .into_iter()
        .map(|(assignment, faculty, course)| {
            let created_by = assignment
                .created_by_id
                .and_then(|id| refs.get(&id).cloned());
            ScheduleResponse::shape(
                assignment,
                faculty.map(FacultyRef::from),
                course.map(CourseRef::from),
                created_by,
            )
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Creates an assignment; the (faculty, course, academic year) triple
/// must be unique.
#[utoipa::path(
    post,
    path = "/schedule",
    request_body = CreateScheduleRequest,
    responses(
        (status = 201, description = "Assignment created", body = ScheduleResponse),
        (status = 400, description = "Missing fields or duplicate assignment"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Faculty member or course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedule"
)]
pub async fn create_assignment(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    let faculty_id = payload.faculty_id.unwrap_or_default();
    let course_id = payload.course_id.unwrap_or_default();
    let academic_year = payload.academic_year.unwrap_or_default();

    let faculty = FacultyRepository::new()
        .find_by_id(faculty_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create schedule assignment", e))?
        .ok_or_else(|| ApiError::not_found("Faculty member not found"))?;

    let course = CourseRepository::new()
        .find_by_id(course_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create schedule assignment", e))?
        .ok_or_else(|| ApiError::not_found("Course not found"))?;

    let schedule_repo = ScheduleRepository::new();
    let duplicate = schedule_repo
        .exists(faculty_id, course_id, &academic_year)
        .await
        .map_err(|e| ApiError::internal("Failed to create schedule assignment", e))?;
    if duplicate {
        return Err(ApiError::bad_request(
            "This course is already assigned to this faculty member for this year",
        ));
    }

    let assignment = schedule_repo
        .create(
            Uuid::new_v4(),
            faculty_id,
            course_id,
            academic_year,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create schedule assignment", e))?;

    let refs = user_refs([assignment.created_by_id]).await?;
    let created_by = assignment
        .created_by_id
        .and_then(|id| refs.get(&id).cloned());

    Ok((
        StatusCode::CREATED,
        Json(ScheduleResponse::shape(
            assignment,
            Some(FacultyRef::from(faculty)),
            Some(CourseRef::from(course)),
            created_by,
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/schedule/{assignment_id}",
    params(("assignment_id" = Uuid, Path, description = "Assignment id")),
    responses(
        (status = 200, description = "Assignment deleted", body = SuccessResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Schedule"
)]
pub async fn delete_assignment(
    AuthClaims(_claims): AuthClaims,
    Path(assignment_id): Path<Uuid>,
) -> Result<(StatusCode, Json<SuccessResponse>), ApiError> {
    let schedule_repo = ScheduleRepository::new();
    schedule_repo
        .find_by_id(assignment_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete schedule assignment", e))?
        .ok_or_else(|| ApiError::not_found("Schedule assignment not found"))?;

    schedule_repo
        .delete(assignment_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete schedule assignment", e))?;

    Ok((StatusCode::OK, Json(SuccessResponse { success: true })))
}
