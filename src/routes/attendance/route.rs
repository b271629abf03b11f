use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use super::dto::{
    AttendanceListQuery, AttendancePairQuery, AttendanceResponse, RecordAttendanceRequest,
    UpdateAttendanceRequest,
};
use crate::entities::sea_orm_active_enums::AttendanceStatus;
use crate::error::ApiError;
use crate::extractor::AuthClaims;
use crate::repositories::{
    ActivityRepository, AttendanceFilter, AttendanceRepository, StudentRepository,
};
use crate::routes::common::{ActivityRef, MessageResponse, StudentRef};

pub fn create_route() -> Router {
    Router::new()
        .route("/attendance", get(get_all_attendance))
        .route("/attendance", post(record_attendance))
        .route("/attendance", put(update_attendance))
        .route("/attendance", delete(delete_attendance))
}

fn pair_from(query: &AttendancePairQuery) -> Result<(Uuid, Uuid), ApiError> {
    match (query.student_id, query.activity_id) {
        (Some(student_id), Some(activity_id)) => Ok((student_id, activity_id)),
        _ => Err(ApiError::bad_request(
            "Student ID and activity ID are required",
        )),
    }
}

/// Attendance rows newest first with student and activity projections.
#[utoipa::path(
    get,
    path = "/attendance",
    params(AttendanceListQuery),
    responses(
        (status = 200, description = "Attendance records", body = [AttendanceResponse]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_all_attendance(
    Query(query): Query<AttendanceListQuery>,
) -> Result<(StatusCode, Json<Vec<AttendanceResponse>>), ApiError> {
    let records = AttendanceRepository::new()
        .find_all(AttendanceFilter {
            activity_id: query.activity_id,
            student_id: query.student_id,
        })
        .await
        .map_err(|e| ApiError::internal("Failed to fetch attendance records", e))?;

    let mut student_ids: Vec<Uuid> = records.iter().map(|r| r.student_id).collect();
    student_ids.sort_unstable();
    student_ids.dedup();
    let mut activity_ids: Vec<Uuid> = records.iter().map(|r| r.activity_id).collect();
    activity_ids.sort_unstable();
    activity_ids.dedup();

    let students: HashMap<Uuid, StudentRef> = StudentRepository::new()
        .find_by_ids(student_ids)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch attendance records", e))?
        .into_iter()
        .map(|s| (s.id, StudentRef::from(s)))
        .collect();
    let activities: HashMap<Uuid, ActivityRef> = ActivityRepository::new()
        .find_by_ids(activity_ids)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch attendance records", e))?
        .into_iter()
        .map(|a| (a.id, ActivityRef::from(a)))
        .collect();

    let response = records
        .into_iter()
        .map(|record| {
            let student = students.get(&record.student_id).cloned();
            let activity = activities.get(&record.activity_id).cloned();
            AttendanceResponse::shape(record, student, activity)
        })
        .collect();

    Ok((StatusCode::OK, Json(response)))
}

/// Upserts on the (student, activity) pair. 201 when a new row is
/// created, 200 when an existing row is overwritten.
#[utoipa::path(
    post,
    path = "/attendance",
    request_body = RecordAttendanceRequest,
    responses(
        (status = 200, description = "Attendance record updated", body = AttendanceResponse),
        (status = 201, description = "Attendance record created", body = AttendanceResponse),
        (status = 400, description = "Missing fields or invalid status"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Student or activity not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn record_attendance(
    AuthClaims(_claims): AuthClaims,
    Json(payload): Json<RecordAttendanceRequest>,
) -> Result<(StatusCode, Json<AttendanceResponse>), ApiError> {
    let status = payload.validate().map_err(ApiError::bad_request)?;
    let student_id = payload.student_id.unwrap_or_default();
    let activity_id = payload.activity_id.unwrap_or_default();

    let student = StudentRepository::new()
        .find_by_id(student_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create attendance record", e))?
        .ok_or_else(|| ApiError::not_found("Student not found"))?;

    let activity = ActivityRepository::new()
        .find_by_id(activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to create attendance record", e))?
        .ok_or_else(|| ApiError::not_found("Activity not found"))?;

    let (record, created) = AttendanceRepository::new()
        .upsert(student_id, activity_id, status, payload.notes)
        .await
        .map_err(|e| ApiError::internal("Failed to create attendance record", e))?;

    let code = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((
        code,
        Json(AttendanceResponse::shape(
            record,
            Some(StudentRef::from(student)),
            Some(ActivityRef::from(activity)),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/attendance",
    request_body = UpdateAttendanceRequest,
    responses(
        (status = 200, description = "Attendance record updated", body = AttendanceResponse),
        (status = 400, description = "Missing ids or invalid status"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    AuthClaims(_claims): AuthClaims,
    Json(payload): Json<UpdateAttendanceRequest>,
) -> Result<(StatusCode, Json<AttendanceResponse>), ApiError> {
    let (student_id, activity_id) = payload.pair().map_err(ApiError::bad_request)?;

    let status = match payload.status.as_deref() {
        Some(raw) => Some(AttendanceStatus::parse(raw).ok_or_else(|| {
            ApiError::bad_request("Invalid status. Must be one of: present, absent, late, excused")
        })?),
        None => None,
    };

    let attendance_repo = AttendanceRepository::new();
    attendance_repo
        .find_by_pair(student_id, activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update attendance record", e))?
        .ok_or_else(|| ApiError::not_found("Attendance record not found"))?;

    let record = attendance_repo
        .update_by_pair(student_id, activity_id, status, payload.notes)
        .await
        .map_err(|e| ApiError::internal("Failed to update attendance record", e))?;

    let student = StudentRepository::new()
        .find_by_id(student_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update attendance record", e))?
        .map(StudentRef::from);
    let activity = ActivityRepository::new()
        .find_by_id(activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to update attendance record", e))?
        .map(ActivityRef::from);

    Ok((
        StatusCode::OK,
        Json(AttendanceResponse::shape(record, student, activity)),
    ))
}

#[utoipa::path(
    delete,
    path = "/attendance",
    params(AttendancePairQuery),
    responses(
        (status = 200, description = "Attendance record deleted", body = MessageResponse),
        (status = 400, description = "Missing ids"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    AuthClaims(_claims): AuthClaims,
    Query(query): Query<AttendancePairQuery>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (student_id, activity_id) = pair_from(&query)?;

    let attendance_repo = AttendanceRepository::new();
    attendance_repo
        .find_by_pair(student_id, activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete attendance record", e))?
        .ok_or_else(|| ApiError::not_found("Attendance record not found"))?;

    attendance_repo
        .delete_by_pair(student_id, activity_id)
        .await
        .map_err(|e| ApiError::internal("Failed to delete attendance record", e))?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Attendance record deleted successfully".to_string(),
        }),
    ))
}
