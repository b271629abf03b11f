use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{course, schedule_assignment};
use crate::static_service::DATABASE_CONNECTION;

/// Explicit list filter, one field per supported query parameter.
#[derive(Debug, Default)]
pub struct CourseFilter {
    pub year: Option<String>,
    pub semester: Option<i32>,
}

pub struct CourseRepository;

impl CourseRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    /// Default ordering is (year, semester, code) ascending.
    pub async fn find_all(&self, filter: CourseFilter) -> Result<Vec<course::Model>> {
        let db = self.get_connection();
        let mut query = course::Entity::find();

        if let Some(year) = filter.year {
            query = query.filter(course::Column::Year.eq(year));
        }
        if let Some(semester) = filter.semester {
            query = query.filter(course::Column::Semester.eq(semester));
        }

        let courses = query
            .order_by_asc(course::Column::Year)
            .order_by_asc(course::Column::Semester)
            .order_by_asc(course::Column::Code)
            .all(db)
            .await?;
        Ok(courses)
    }

    pub async fn find_by_id(&self, course_id: Uuid) -> Result<Option<course::Model>> {
        let db = self.get_connection();
        let course = course::Entity::find_by_id(course_id).one(db).await?;
        Ok(course)
    }

    /// Batch lookup for nesting course projections into other responses.
    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<course::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.get_connection();
        let courses = course::Entity::find()
            .filter(course::Column::Id.is_in(ids))
            .all(db)
            .await?;
        Ok(courses)
    }

    pub async fn assignments_for_course(
        &self,
        course_id: Uuid,
    ) -> Result<Vec<schedule_assignment::Model>> {
        let db = self.get_connection();
        let assignments = schedule_assignment::Entity::find()
            .filter(schedule_assignment::Column::CourseId.eq(course_id))
            .all(db)
            .await?;
        Ok(assignments)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        course_id: Uuid,
        code: String,
        name: String,
        hours: i32,
        year: String,
        semester: i32,
        section: Option<String>,
        created_by_id: Option<Uuid>,
    ) -> Result<course::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let course_model = course::ActiveModel {
            id: Set(course_id),
            code: Set(code),
            name: Set(name),
            hours: Set(hours),
            year: Set(year),
            semester: Set(semester),
            section: Set(section),
            created_by_id: Set(created_by_id),
            updated_by_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = course_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(&self, course_id: Uuid, updates: CourseUpdate) -> Result<course::Model> {
        let course = self
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Course not found"))?;
        let db = self.get_connection();

        let mut active_model: course::ActiveModel = course.into();

        if let Some(code) = updates.code {
            active_model.code = Set(code);
        }
        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(hours) = updates.hours {
            active_model.hours = Set(hours);
        }
        if let Some(year) = updates.year {
            active_model.year = Set(year);
        }
        if let Some(semester) = updates.semester {
            active_model.semester = Set(semester);
        }
        active_model.section = Set(updates.section);
        active_model.updated_by_id = Set(updates.updated_by_id);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    /// Removes the course and every schedule assignment referencing it as
    /// one atomic transaction.
    pub async fn delete_with_assignments(&self, course_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        let txn = db.begin().await?;

        schedule_assignment::Entity::delete_many()
            .filter(schedule_assignment::Column::CourseId.eq(course_id))
            .exec(&txn)
            .await?;

        course::Entity::delete_by_id(course_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

pub struct CourseUpdate {
    pub code: Option<String>,
    pub name: Option<String>,
    pub hours: Option<i32>,
    pub year: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub updated_by_id: Option<Uuid>,
}
