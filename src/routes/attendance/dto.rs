use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::attendance_record;
use crate::entities::sea_orm_active_enums::AttendanceStatus;
use crate::routes::common::{ActivityRef, StudentRef};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub student_id: Option<Uuid>,
    pub activity_id: Option<Uuid>,

    /// One of `present`, `absent`, `late`, `excused`.
    #[schema(example = "present")]
    pub status: Option<String>,

    pub notes: Option<String>,
}

impl RecordAttendanceRequest {
    pub fn validate(&self) -> Result<AttendanceStatus, String> {
        if self.student_id.is_none()
            || self.activity_id.is_none()
            || self.status.as_deref().unwrap_or("").is_empty()
        {
            return Err("Student ID, activity ID, and status are required".to_string());
        }
        AttendanceStatus::parse(self.status.as_deref().unwrap_or("")).ok_or_else(|| {
            "Invalid status. Must be one of: present, absent, late, excused".to_string()
        })
    }
}

/// Updates carry the addressing pair in the body alongside the new
/// values.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttendanceRequest {
    pub student_id: Option<Uuid>,
    pub activity_id: Option<Uuid>,

    /// One of `present`, `absent`, `late`, `excused`.
    pub status: Option<String>,

    pub notes: Option<String>,
}

impl UpdateAttendanceRequest {
    pub fn pair(&self) -> Result<(Uuid, Uuid), String> {
        match (self.student_id, self.activity_id) {
            (Some(student_id), Some(activity_id)) => Ok((student_id, activity_id)),
            _ => Err("Student ID and activity ID are required".to_string()),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceListQuery {
    pub activity_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
}

/// Deletes address rows by the (student, activity) pair rather than
/// their row id.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePairQuery {
    pub student_id: Option<Uuid>,
    pub activity_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub activity_id: Uuid,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
    pub recorded_at: NaiveDateTime,
    pub student: Option<StudentRef>,
    pub activity: Option<ActivityRef>,
}

impl AttendanceResponse {
    pub fn shape(
        record: attendance_record::Model,
        student: Option<StudentRef>,
        activity: Option<ActivityRef>,
    ) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            activity_id: record.activity_id,
            status: record.status,
            notes: record.notes,
            recorded_at: record.recorded_at,
            student,
            activity,
        }
    }
}
