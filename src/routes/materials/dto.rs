use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::teaching_material;
use crate::routes::common::{CourseRef, UserRef};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMaterialRequest {
    #[schema(example = "Lecture 4 Slides")]
    pub title: Option<String>,

    pub course_id: Option<Uuid>,

    #[serde(rename = "type")]
    #[schema(example = "slides")]
    pub material_type: Option<String>,

    pub description: Option<String>,
    pub file_url: Option<String>,
    pub external_url: Option<String>,
    pub section: Option<String>,
}

impl CreateMaterialRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.as_deref().unwrap_or("").is_empty()
            || self.course_id.is_none()
            || self.material_type.as_deref().unwrap_or("").is_empty()
        {
            return Err("Title, course ID, and type are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaterialRequest {
    pub title: Option<String>,
    pub course_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub material_type: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub external_url: Option<String>,
    pub section: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct MaterialListQuery {
    pub course_id: Option<Uuid>,
    pub section: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResponse {
    pub id: Uuid,
    pub title: String,
    pub course_id: Uuid,
    #[serde(rename = "type")]
    pub material_type: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub external_url: Option<String>,
    pub section: Option<String>,
    pub created_by_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserRef>,
    pub course: Option<CourseRef>,
}

impl MaterialResponse {
    pub fn shape(
        material: teaching_material::Model,
        created_by: Option<UserRef>,
        course: Option<CourseRef>,
    ) -> Self {
        Self {
            id: material.id,
            title: material.title,
            course_id: material.course_id,
            material_type: material.material_type,
            description: material.description,
            file_url: material.file_url,
            external_url: material.external_url,
            section: material.section,
            created_by_id: material.created_by_id,
            created_at: material.created_at,
            updated_at: material.updated_at,
            created_by,
            course,
        }
    }
}
