use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::exam;
use crate::static_service::DATABASE_CONNECTION;

#[derive(Debug, Default)]
pub struct ExamFilter {
    pub course_id: Option<Uuid>,
    pub section: Option<String>,
}

pub struct ExamRepository;

impl ExamRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self, filter: ExamFilter) -> Result<Vec<exam::Model>> {
        let db = self.get_connection();
        let mut query = exam::Entity::find();

        if let Some(course_id) = filter.course_id {
            query = query.filter(exam::Column::CourseId.eq(course_id));
        }
        if let Some(section) = filter.section {
            query = query.filter(exam::Column::Section.eq(section));
        }

        let exams = query.order_by_asc(exam::Column::ExamDate).all(db).await?;
        Ok(exams)
    }

    pub async fn find_by_id(&self, exam_id: Uuid) -> Result<Option<exam::Model>> {
        let db = self.get_connection();
        let exam = exam::Entity::find_by_id(exam_id).one(db).await?;
        Ok(exam)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        exam_id: Uuid,
        title: String,
        course_id: Uuid,
        exam_date: NaiveDateTime,
        exam_type: String,
        duration: Option<i32>,
        location: Option<String>,
        section: Option<String>,
        notes: Option<String>,
        created_by_id: Option<Uuid>,
    ) -> Result<exam::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let exam_model = exam::ActiveModel {
            id: Set(exam_id),
            title: Set(title),
            course_id: Set(course_id),
            exam_date: Set(exam_date),
            exam_type: Set(exam_type),
            duration: Set(duration),
            location: Set(location),
            section: Set(section),
            notes: Set(notes),
            created_by_id: Set(created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = exam_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(&self, exam_id: Uuid, updates: ExamUpdate) -> Result<exam::Model> {
        let exam = self
            .find_by_id(exam_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Exam not found"))?;
        let db = self.get_connection();

        let mut active_model: exam::ActiveModel = exam.into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(course_id) = updates.course_id {
            active_model.course_id = Set(course_id);
        }
        if let Some(exam_date) = updates.exam_date {
            active_model.exam_date = Set(exam_date);
        }
        if let Some(exam_type) = updates.exam_type {
            active_model.exam_type = Set(exam_type);
        }
        active_model.duration = Set(updates.duration);
        active_model.location = Set(updates.location);
        active_model.section = Set(updates.section);
        active_model.notes = Set(updates.notes);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, exam_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        exam::Entity::delete_by_id(exam_id).exec(db).await?;
        Ok(())
    }
}

pub struct ExamUpdate {
    pub title: Option<String>,
    pub course_id: Option<Uuid>,
    pub exam_date: Option<NaiveDateTime>,
    pub exam_type: Option<String>,
    pub duration: Option<i32>,
    pub location: Option<String>,
    pub section: Option<String>,
    pub notes: Option<String>,
}
