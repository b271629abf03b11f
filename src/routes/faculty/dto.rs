use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::faculty_member;
use crate::routes::common::{AssignmentRow, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFacultyRequest {
    #[schema(example = "Dr. Amina Hassan")]
    pub name: Option<String>,

    #[schema(example = "Associate Professor")]
    pub rank: Option<String>,

    pub department: Option<String>,
}

impl CreateFacultyRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.as_deref().unwrap_or("").is_empty()
            || self.rank.as_deref().unwrap_or("").is_empty()
        {
            return Err("Name and rank are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFacultyRequest {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacultyResponse {
    pub id: Uuid,
    pub name: String,
    pub rank: String,
    pub department: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub updated_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
    pub schedule_assignments: Vec<AssignmentRow>,
}

impl FacultyResponse {
    pub fn shape(
        faculty: faculty_member::Model,
        created_by: Option<UserRef>,
        updated_by: Option<UserRef>,
        schedule_assignments: Vec<AssignmentRow>,
    ) -> Self {
        Self {
            id: faculty.id,
            name: faculty.name,
            rank: faculty.rank,
            department: faculty.department,
            created_by_id: faculty.created_by_id,
            updated_by_id: faculty.updated_by_id,
            created_at: faculty.created_at,
            updated_at: faculty.updated_at,
            created_by,
            updated_by,
            schedule_assignments,
        }
    }
}
