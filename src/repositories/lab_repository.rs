use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::lab;
use crate::static_service::DATABASE_CONNECTION;

#[derive(Debug, Default)]
pub struct LabFilter {
    pub course_id: Option<Uuid>,
    pub section: Option<String>,
}

pub struct LabRepository;

impl LabRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self, filter: LabFilter) -> Result<Vec<lab::Model>> {
        let db = self.get_connection();
        let mut query = lab::Entity::find();

        if let Some(course_id) = filter.course_id {
            query = query.filter(lab::Column::CourseId.eq(course_id));
        }
        if let Some(section) = filter.section {
            query = query.filter(lab::Column::Section.eq(section));
        }

        let labs = query.order_by_asc(lab::Column::LabDay).all(db).await?;
        Ok(labs)
    }

    pub async fn find_by_id(&self, lab_id: Uuid) -> Result<Option<lab::Model>> {
        let db = self.get_connection();
        let lab = lab::Entity::find_by_id(lab_id).one(db).await?;
        Ok(lab)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        lab_id: Uuid,
        name: String,
        course_id: Uuid,
        lab_day: String,
        start_time: String,
        end_time: String,
        location: Option<String>,
        capacity: Option<i32>,
        section: Option<String>,
        created_by_id: Option<Uuid>,
    ) -> Result<lab::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let lab_model = lab::ActiveModel {
            id: Set(lab_id),
            name: Set(name),
            course_id: Set(course_id),
            lab_day: Set(lab_day),
            start_time: Set(start_time),
            end_time: Set(end_time),
            location: Set(location),
            capacity: Set(capacity),
            section: Set(section),
            created_by_id: Set(created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = lab_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(&self, lab_id: Uuid, updates: LabUpdate) -> Result<lab::Model> {
        let lab = self
            .find_by_id(lab_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Lab not found"))?;
        let db = self.get_connection();

        let mut active_model: lab::ActiveModel = lab.into();

        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(course_id) = updates.course_id {
            active_model.course_id = Set(course_id);
        }
        if let Some(lab_day) = updates.lab_day {
            active_model.lab_day = Set(lab_day);
        }
        if let Some(start_time) = updates.start_time {
            active_model.start_time = Set(start_time);
        }
        if let Some(end_time) = updates.end_time {
            active_model.end_time = Set(end_time);
        }
        active_model.location = Set(updates.location);
        active_model.capacity = Set(updates.capacity);
        active_model.section = Set(updates.section);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, lab_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        lab::Entity::delete_by_id(lab_id).exec(db).await?;
        Ok(())
    }
}

pub struct LabUpdate {
    pub name: Option<String>,
    pub course_id: Option<Uuid>,
    pub lab_day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub section: Option<String>,
}
