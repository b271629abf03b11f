use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::activity;
use crate::entities::sea_orm_active_enums::AttendanceStatus;
use crate::routes::common::{CourseRef, GroupRef, StudentRef, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    #[schema(example = "Midterm Review Session")]
    pub title: Option<String>,

    pub description: Option<String>,

    #[serde(rename = "type")]
    #[schema(example = "seminar")]
    pub activity_type: Option<String>,

    pub course_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub max_score: Option<i32>,
    pub section: Option<String>,
}

impl CreateActivityRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.as_deref().unwrap_or("").is_empty()
            || self.activity_type.as_deref().unwrap_or("").is_empty()
            || self.start_date.is_none()
        {
            return Err("Title, type, and start date are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    pub course_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub max_score: Option<i32>,
    pub section: Option<String>,
}

/// Attendance row nested in the activity detail response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAttendanceRow {
    pub id: Uuid,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
    pub recorded_at: NaiveDateTime,
    pub student: Option<StudentRef>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub course_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub max_score: Option<i32>,
    pub section: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
    pub course: Option<CourseRef>,
    pub group: Option<GroupRef>,
    /// Only populated on the detail view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_records: Option<Vec<ActivityAttendanceRow>>,
}

impl ActivityResponse {
    pub fn shape(
        activity: activity::Model,
        created_by: Option<UserRef>,
        course: Option<CourseRef>,
        group: Option<GroupRef>,
        attendance_records: Option<Vec<ActivityAttendanceRow>>,
    ) -> Self {
        Self {
            id: activity.id,
            title: activity.title,
            description: activity.description,
            activity_type: activity.activity_type,
            course_id: activity.course_id,
            group_id: activity.group_id,
            start_date: activity.start_date,
            end_date: activity.end_date,
            location: activity.location,
            max_score: activity.max_score,
            section: activity.section,
            created_by_id: activity.created_by_id,
            created_at: activity.created_at,
            updated_at: activity.updated_at,
            created_by,
            course,
            group,
            attendance_records,
        }
    }
}
