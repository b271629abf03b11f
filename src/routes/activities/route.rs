use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use std::collections::HashMap;
use uuid::Uuid;

use super::dto::{
    ActivityAttendanceRow, ActivityResponse, CreateActivityRequest, UpdateActivityRequest,
};
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{ActivityRepository, ActivityUpdate, CourseRepository, GroupRepository};
use crate::routes::common::{
    CourseRef, GroupRef, MessageResponse, StudentRef, claims_user_id, user_refs,
};

pub fn create_route() -> Router {
    Router::new()
        .route("/activities", get(get_all_activities))
        .route("/activities", post(create_activity))
        .route("/activities/{activity_id}", get(get_activity))
        .route("/activities/{activity_id}", put(update_activity))
        .route("/activities/{activity_id}", delete(delete_activity))
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

async fn group_refs(ids: Vec<Uuid>) -> Result<HashMap<Uuid, GroupRef>, ApiError> {
    let groups = GroupRepository::new()
        .find_by_ids(ids)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch groups", e))?;
    Ok(groups
        .into_iter()
        .map(|g| {
            (
                g.id,
                GroupRef {
                    id: g.id,
                    name: g.name,
                },
            )
        })
        .collect())
}

/// Verifies that any referenced course or group exists before a write.
async fn check_references(
    course_id: Option<Uuid>,
    group_id: Option<Uuid>,
    context: &'static str,
) -> Result<(), ApiError> {
    if let Some(course_id) = course_id {
        CourseRepository::new()
            .find_by_id(course_id)
            .await
            .map_err(|e| ApiError::internal(context, e))?
            .ok_or_else(|| ApiError::not_found("Course not found"))?;
    }
    if let Some(group_id) = group_id {
        GroupRepository::new()
            .find_by_id(group_id)
            .await
            .map_err(|e| ApiError::internal(context, e))?
            .ok_or_else(|| ApiError::not_found("Group not found"))?;
    }
    Ok(())
}

/// Activities newest start date first.
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "Activities", body = [ActivityResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Activities"
)]
pub async fn get_all_activities() -> Result<(StatusCode, Json<Vec<ActivityResponse>>), ApiError> {
    let activities = ActivityRepository::new()
        .find_all()
        .await
        .map_err(|e| ApiError::internal("Failed to fetch activities", e))?;

    let refs = user_refs(activities.iter().map(|a| a.created_by_id)).await?;
    let courses = course_refs(activities.iter().filter_map(|a| a.course_id).collect()).await?;
    let groups = group_refs(activities.iter().filter_map(|a| a.group_id).collect()).await?;

    let response = activities
        .into_iter()
        .map(|a| {
            let created_by = a.created_by_id.and_then(|id| refs.get(&id).cloned());
            let course = a.course_id.and_then(|id| courses.get(&id).cloned());
            let group = a.group_id.and_then(|id| groups.get(&id).cloned());
            ActivityResponse::shape(a, created_by, course, group, None)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/activities",
    request_body = CreateActivityRequest,
    responses(
        (status = 201, description = "Activity created", body = ActivityResponse),
        (status = 400, description = "Missing required fields"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Referenced course or group not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Activities"
)]
pub async fn create_activity(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), ApiError> {
    payload.validate().map_err(ApiError::bad_request)?;
    check_references(
        payload.course_id,
        payload.group_id,
        "Failed to create activity",
    )
    .await?;

    let activity = ActivityRepository::new()
        .create(
            Uuid::new_v4(),
            payload.title.unwrap_or_default(),
            payload.description,
            payload.activity_type.unwrap_or_default(),
            payload.course_id,
            payload.group_id,
            payload.start_date.unwrap_or_default(),
            payload.end_date,
            payload.location,
            payload.max_score,
            payload.section,
            claims_user_id(&claims),
        )
        .await
        .map_err(|e| ApiError::internal("Failed to create activity", e))?;

    let refs = user_refs([activity.created_by_id]).await?;
    let created_by = activity.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(activity.course_id.into_iter().collect()).await?;
    let course = activity.course_id.and_then(|id| courses.get(&id).cloned());
    let groups = group_refs(activity.group_id.into_iter().collect()).await?;
    let group = activity.group_id.and_then(|id| groups.get(&id).cloned());

    Ok((
        StatusCode::CREATED,
        Json(ActivityResponse::shape(
            activity, created_by, course, group, None,
        )),
    ))
}

/// Activity detail including its attendance rows.
#[utoipa::path(
    get,
    path = "/activities/{activity_id}",
    params(("activity_id" = Uuid, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity", body = ActivityResponse),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Activities"
)]
pub async fn get_activity(
    Path(activity_id): Path<Uuid>,
) -> Result<(StatusCode, Json<ActivityResponse>), ApiError> {
    let activity_repo = ActivityRepository::new();
    let activity = activity_repo
        .find_by_id(activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch activity", e))?
        .ok_or_else(|| ApiError::not_found("Activity not found"))?;

    let attendance = activity_repo
        .attendance_with_students(activity.id)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch activity", e))?
        .into_iter()
        .map(|(record, student)| ActivityAttendanceRow {
            id: record.id,
            status: record.status,
            notes: record.notes,
            recorded_at: record.recorded_at,
            student: student.map(StudentRef::from),
        })
        .collect();

    let refs = user_refs([activity.created_by_id]).await?;
    let created_by = activity.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(activity.course_id.into_iter().collect()).await?;
    let course = activity.course_id.and_then(|id| courses.get(&id).cloned());
    let groups = group_refs(activity.group_id.into_iter().collect()).await?;
    let group = activity.group_id.and_then(|id| groups.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(ActivityResponse::shape(
            activity,
            created_by,
            course,
            group,
            Some(attendance),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/activities/{activity_id}",
    params(("activity_id" = Uuid, Path, description = "Activity id")),
    request_body = UpdateActivityRequest,
    responses(
        (status = 200, description = "Activity updated", body = ActivityResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Activity or referenced entity not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Activities"
)]
pub async fn update_activity(
    AuthClaims(_claims): AuthClaims,
    Path(activity_id): Path<Uuid>,
    Json(payload): Json<UpdateActivityRequest>,
) -> Result<(StatusCode, Json<ActivityResponse>), ApiError> {
    let activity_repo = ActivityRepository::new();
    activity_repo
        .find_by_id(activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update activity", e))?
        .ok_or_else(|| ApiError::not_found("Activity not found"))?;

    check_references(
        payload.course_id,
        payload.group_id,
        "Failed to update activity",
    )
    .await?;

    let activity = activity_repo
        .update(
            activity_id,
            ActivityUpdate {
                title: payload.title,
                description: payload.description,
                activity_type: payload.activity_type,
                course_id: payload.course_id,
                group_id: payload.group_id,
                start_date: payload.start_date,
                end_date: payload.end_date,
                location: payload.location,
                max_score: payload.max_score,
                section: payload.section,
            },
        )
        .await
        .map_err(|e| ApiError::internal("Failed to update activity", e))?;

    let refs = user_refs([activity.created_by_id]).await?;
    let created_by = activity.created_by_id.and_then(|id| refs.get(&id).cloned());
    let courses = course_refs(activity.course_id.into_iter().collect()).await?;
    let course = activity.course_id.and_then(|id| courses.get(&id).cloned());
    let groups = group_refs(activity.group_id.into_iter().collect()).await?;
    let group = activity.group_id.and_then(|id| groups.get(&id).cloned());

    Ok((
        StatusCode::OK,
        Json(ActivityResponse::shape(
            activity, created_by, course, group, None,
        )),
    ))
}

/// Deletes the activity and its attendance rows atomically.
#[utoipa::path(
    delete,
    path = "/activities/{activity_id}",
    params(("activity_id" = Uuid, Path, description = "Activity id")),
    responses(
        (status = 200, description = "Activity deleted", body = MessageResponse),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Activities"
)]
pub async fn delete_activity(
    AuthClaims(_claims): AuthClaims,
    Path(activity_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let activity_repo = ActivityRepository::new();
    activity_repo
        .find_by_id(activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete activity", e))?
        .ok_or_else(|| ApiError::not_found("Activity not found"))?;

    activity_repo
        .delete_with_attendance(activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete activity", e))?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Activity deleted successfully".to_string(),
        }),
    ))
}
