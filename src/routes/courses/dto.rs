use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::course;
use crate::routes::common::{AssignmentRow, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    #[schema(example = "CS201")]
    pub code: Option<String>,

    #[schema(example = "Data Structures")]
    pub name: Option<String>,

    #[schema(example = 60)]
    pub hours: Option<i32>,

    #[schema(example = "2025")]
    pub year: Option<String>,

    #[schema(example = 1)]
    pub semester: Option<i32>,

    pub section: Option<String>,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.code.as_deref().unwrap_or("").is_empty()
            || self.name.as_deref().unwrap_or("").is_empty()
            || self.hours.is_none()
            || self.year.as_deref().unwrap_or("").is_empty()
            || self.semester.is_none()
        {
            return Err("All fields are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub hours: Option<i32>,
    pub year: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CourseListQuery {
    pub year: Option<String>,
    pub semester: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub hours: i32,
    pub year: String,
    pub semester: i32,
    pub section: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub updated_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
    pub schedule_assignments: Vec<AssignmentRow>,
}

impl CourseResponse {
    pub fn shape(
        course: course::Model,
        created_by: Option<UserRef>,
        updated_by: Option<UserRef>,
        schedule_assignments: Vec<AssignmentRow>,
    ) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
            hours: course.hours,
            year: course.year,
            semester: course.semester,
            section: course.section,
            created_by_id: course.created_by_id,
            updated_by_id: course.updated_by_id,
            created_at: course.created_at,
            updated_at: course.updated_at,
            created_by,
            updated_by,
            schedule_assignments,
        }
    }
}
