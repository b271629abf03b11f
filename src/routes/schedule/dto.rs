use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::schedule_assignment;
use crate::routes::common::{CourseRef, FacultyRef, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub faculty_id: Option<Uuid>,
    pub course_id: Option<Uuid>,

    #[schema(example = "2025-2026")]
    pub academic_year: Option<String>,
}

impl CreateScheduleRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.faculty_id.is_none()
            || self.course_id.is_none()
            || self.academic_year.as_deref().unwrap_or("").is_empty()
        {
            return Err("Faculty ID, Course ID, and Academic Year are required".to_string());
        }
        Ok(())
    }
}

/// `year` filters on academic year; `semester` post-filters on the
/// assigned course's semester.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ScheduleListQuery {
    pub year: Option<String>,
    pub semester: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub course_id: Uuid,
    pub academic_year: String,
    pub created_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub faculty_member: Option<FacultyRef>,
    pub course: Option<CourseRef>,
    pub created_by: Option<UserRef>,
}

impl ScheduleResponse {
    pub fn shape(
        assignment: schedule_assignment::Model,
        faculty_member: Option<FacultyRef>,
        course: Option<CourseRef>,
        created_by: Option<UserRef>,
    ) -> Self {
        Self {
            id: assignment.id,
            faculty_id: assignment.faculty_id,
            course_id: assignment.course_id,
            academic_year: assignment.academic_year,
            created_by_id: assignment.created_by_id,
            created_at: assignment.created_at,
            faculty_member,
            course,
            created_by,
        }
    }
}
