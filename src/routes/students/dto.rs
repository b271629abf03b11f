use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::student;
use crate::routes::common::UserRef;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[schema(example = "Lina Mahmoud")]
    pub name: Option<String>,

    /// Business student number, unique across the department.
    #[schema(example = "2025-0142")]
    pub student_id: Option<String>,

    pub email: Option<String>,
    pub gender: Option<String>,

    #[schema(example = "2025")]
    pub year: Option<String>,

    #[schema(example = 1)]
    pub semester: Option<i32>,

    pub section: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.as_deref().unwrap_or("").is_empty()
            || self.student_id.as_deref().unwrap_or("").is_empty()
            || self.year.as_deref().unwrap_or("").is_empty()
            || self.semester.is_none()
        {
            return Err("Name, student ID, year, and semester are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub year: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: Uuid,
    pub name: String,
    pub student_id: String,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub year: String,
    pub semester: i32,
    pub section: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
}

impl StudentResponse {
    pub fn shape(student: student::Model, created_by: Option<UserRef>) -> Self {
        Self {
            id: student.id,
            name: student.name,
            student_id: student.student_id,
            email: student.email,
            gender: student.gender,
            year: student.year,
            semester: student.semester,
            section: student.section,
            phone: student.phone,
            notes: student.notes,
            created_by_id: student.created_by_id,
            created_at: student.created_at,
            updated_at: student.updated_at,
            created_by,
        }
    }
}
