use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::exam;
use crate::routes::common::{CourseRef, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExamRequest {
    #[schema(example = "Final Exam")]
    pub title: Option<String>,

    pub course_id: Option<Uuid>,
    pub exam_date: Option<NaiveDateTime>,

    #[serde(rename = "examType")]
    #[schema(example = "final")]
    pub exam_type: Option<String>,

    pub duration: Option<i32>,
    pub location: Option<String>,
    pub section: Option<String>,
    pub notes: Option<String>,
}

impl CreateExamRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.as_deref().unwrap_or("").is_empty()
            || self.course_id.is_none()
            || self.exam_date.is_none()
            || self.exam_type.as_deref().unwrap_or("").is_empty()
        {
            return Err("Title, course ID, exam date, and exam type are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExamRequest {
    pub title: Option<String>,
    pub course_id: Option<Uuid>,
    pub exam_date: Option<NaiveDateTime>,
    pub exam_type: Option<String>,
    pub duration: Option<i32>,
    pub location: Option<String>,
    pub section: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ExamListQuery {
    pub course_id: Option<Uuid>,
    pub section: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExamResponse {
    pub id: Uuid,
    pub title: String,
    pub course_id: Uuid,
    pub exam_date: NaiveDateTime,
    pub exam_type: String,
    pub duration: Option<i32>,
    pub location: Option<String>,
    pub section: Option<String>,
    pub notes: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
    pub course: Option<CourseRef>,
}

impl ExamResponse {
    pub fn shape(
        exam: exam::Model,
        created_by: Option<UserRef>,
        course: Option<CourseRef>,
    ) -> Self {
        Self {
            id: exam.id,
            title: exam.title,
            course_id: exam.course_id,
            exam_date: exam.exam_date,
            exam_type: exam.exam_type,
            duration: exam.duration,
            location: exam.location,
            section: exam.section,
            notes: exam.notes,
            created_by_id: exam.created_by_id,
            created_at: exam.created_at,
            updated_at: exam.updated_at,
            created_by,
            course,
        }
    }
}
