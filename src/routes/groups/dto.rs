use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::student_group;
use crate::routes::common::{CourseRef, StudentRef, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    #[schema(example = "Project Team 3")]
    pub name: Option<String>,

    pub description: Option<String>,
    pub course_id: Option<Uuid>,
    pub year: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub max_size: Option<i32>,
}

impl CreateGroupRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.as_deref().unwrap_or("").is_empty() {
            return Err("Group name is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub course_id: Option<Uuid>,
    pub year: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub max_size: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberRow {
    pub id: Uuid,
    pub joined_at: NaiveDateTime,
    pub student: Option<StudentRef>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub course_id: Option<Uuid>,
    pub year: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub max_size: Option<i32>,
    pub created_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
    pub course: Option<CourseRef>,
    pub members: Vec<GroupMemberRow>,
}

impl GroupResponse {
    pub fn shape(
        group: student_group::Model,
        created_by: Option<UserRef>,
        course: Option<CourseRef>,
        members: Vec<GroupMemberRow>,
    ) -> Self {
        Self {
            id: group.id,
            name: group.name,
            description: group.description,
            course_id: group.course_id,
            year: group.year,
            semester: group.semester,
            section: group.section,
            max_size: group.max_size,
            created_by_id: group.created_by_id,
            created_at: group.created_at,
            updated_at: group.updated_at,
            created_by,
            course,
            members,
        }
    }
}
