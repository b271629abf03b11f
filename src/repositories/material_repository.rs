use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::teaching_material;
use crate::static_service::DATABASE_CONNECTION;

#[derive(Debug, Default)]
pub struct MaterialFilter {
    pub course_id: Option<Uuid>,
    pub section: Option<String>,
}

pub struct MaterialRepository;

impl MaterialRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self, filter: MaterialFilter) -> Result<Vec<teaching_material::Model>> {
        let db = self.get_connection();
        let mut query = teaching_material::Entity::find();

        if let Some(course_id) = filter.course_id {
            query = query.filter(teaching_material::Column::CourseId.eq(course_id));
        }
        if let Some(section) = filter.section {
            query = query.filter(teaching_material::Column::Section.eq(section));
        }

        let materials = query
            .order_by_desc(teaching_material::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(materials)
    }

    pub async fn find_by_id(&self, material_id: Uuid) -> Result<Option<teaching_material::Model>> {
        let db = self.get_connection();
        let material = teaching_material::Entity::find_by_id(material_id)
            .one(db)
            .await?;
        Ok(material)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        material_id: Uuid,
        title: String,
        course_id: Uuid,
        material_type: String,
        description: Option<String>,
        file_url: Option<String>,
        external_url: Option<String>,
        section: Option<String>,
        created_by_id: Option<Uuid>,
    ) -> Result<teaching_material::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let material_model = teaching_material::ActiveModel {
            id: Set(material_id),
            title: Set(title),
            course_id: Set(course_id),
            material_type: Set(material_type),
            description: Set(description),
            file_url: Set(file_url),
            external_url: Set(external_url),
            section: Set(section),
            created_by_id: Set(created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = material_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        material_id: Uuid,
        updates: MaterialUpdate,
    ) -> Result<teaching_material::Model> {
        let material = self
            .find_by_id(material_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Teaching material not found"))?;
        let db = self.get_connection();

        let mut active_model: teaching_material::ActiveModel = material.into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(course_id) = updates.course_id {
            active_model.course_id = Set(course_id);
        }
        if let Some(material_type) = updates.material_type {
            active_model.material_type = Set(material_type);
        }
        active_model.description = Set(updates.description);
        active_model.file_url = Set(updates.file_url);
        active_model.external_url = Set(updates.external_url);
        active_model.section = Set(updates.section);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, material_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        teaching_material::Entity::delete_by_id(material_id)
            .exec(db)
            .await?;
        Ok(())
    }
}

pub struct MaterialUpdate {
    pub title: Option<String>,
    pub course_id: Option<Uuid>,
    pub material_type: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub external_url: Option<String>,
    pub section: Option<String>,
}
