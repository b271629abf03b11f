use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::lab;
use crate::routes::common::{CourseRef, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabRequest {
    #[schema(example = "Networks Lab A")]
    pub name: Option<String>,

    pub course_id: Option<Uuid>,

    #[schema(example = "Tuesday")]
    pub lab_day: Option<String>,

    #[schema(example = "10:00")]
    pub start_time: Option<String>,

    #[schema(example = "12:00")]
    pub end_time: Option<String>,

    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub section: Option<String>,
}

impl CreateLabRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.as_deref().unwrap_or("").is_empty()
            || self.course_id.is_none()
            || self.lab_day.as_deref().unwrap_or("").is_empty()
            || self.start_time.as_deref().unwrap_or("").is_empty()
            || self.end_time.as_deref().unwrap_or("").is_empty()
        {
            return Err(
                "Name, course ID, lab day, start time, and end time are required".to_string(),
            );
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLabRequest {
    pub name: Option<String>,
    pub course_id: Option<Uuid>,
    pub lab_day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub section: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct LabListQuery {
    pub course_id: Option<Uuid>,
    pub section: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LabResponse {
    pub id: Uuid,
    pub name: String,
    pub course_id: Uuid,
    pub lab_day: String,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub section: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
    pub course: Option<CourseRef>,
}

impl LabResponse {
    pub fn shape(lab: lab::Model, created_by: Option<UserRef>, course: Option<CourseRef>) -> Self {
        Self {
            id: lab.id,
            name: lab.name,
            course_id: lab.course_id,
            lab_day: lab.lab_day,
            start_time: lab.start_time,
            end_time: lab.end_time,
            location: lab.location,
            capacity: lab.capacity,
            section: lab.section,
            created_by_id: lab.created_by_id,
            created_at: lab.created_at,
            updated_at: lab.updated_at,
            created_by,
            course,
        }
    }
}
