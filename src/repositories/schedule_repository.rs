use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::{course, faculty_member, schedule_assignment};
use crate::static_service::DATABASE_CONNECTION;

#[derive(Debug, Default)]
pub struct ScheduleFilter {
    pub academic_year: Option<String>,
}

pub struct ScheduleRepository;

impl ScheduleRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    /// Assignments newest first, each with its faculty member and course.
    pub async fn find_all(
        &self,
        filter: ScheduleFilter,
    ) -> Result<
        Vec<(
            schedule_assignment::Model,
            Option<faculty_member::Model>,
            Option<course::Model>,
        )>,
    > {
        let db = self.get_connection();
        let mut query = schedule_assignment::Entity::find();

        if let Some(academic_year) = filter.academic_year {
            query = query.filter(schedule_assignment::Column::AcademicYear.eq(academic_year));
        }

        let assignments = query
            .order_by_desc(schedule_assignment::Column::CreatedAt)
            .all(db)
            .await?;

        let faculty_ids: Vec<Uuid> = assignments.iter().map(|a| a.faculty_id).collect();
        let course_ids: Vec<Uuid> = assignments.iter().map(|a| a.course_id).collect();

        let faculty: HashMap<Uuid, faculty_member::Model> = if faculty_ids.is_empty() {
            HashMap::new()
        } else {
            faculty_member::Entity::find()
                .filter(faculty_member::Column::Id.is_in(faculty_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|f| (f.id, f))
                .collect()
        };

        let courses: HashMap<Uuid, course::Model> = if course_ids.is_empty() {
            HashMap::new()
        } else {
            course::Entity::find()
                .filter(course::Column::Id.is_in(course_ids))
                .all(db)
                .await?
                .into_iter()
                .map(|c| (c.id, c))
                .collect()
        };

        let rows = assignments
            .into_iter()
            .map(|a| {
                let f = faculty.get(&a.faculty_id).cloned();
                let c = courses.get(&a.course_id).cloned();
                (a, f, c)
            })
            .collect();

        Ok(rows)
    }

    /// Batch lookup for nesting assignment rows into faculty responses.
    pub async fn find_by_faculty_ids(
        &self,
        faculty_ids: Vec<Uuid>,
    ) -> Result<Vec<schedule_assignment::Model>> {
        if faculty_ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.get_connection();
        let assignments = schedule_assignment::Entity::find()
            .filter(schedule_assignment::Column::FacultyId.is_in(faculty_ids))
            .all(db)
            .await?;
        Ok(assignments)
    }

    /// Batch lookup for nesting assignment rows into course responses.
    pub async fn find_by_course_ids(
        &self,
        course_ids: Vec<Uuid>,
    ) -> Result<Vec<schedule_assignment::Model>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.get_connection();
        let assignments = schedule_assignment::Entity::find()
            .filter(schedule_assignment::Column::CourseId.is_in(course_ids))
            .all(db)
            .await?;
        Ok(assignments)
    }

    pub async fn find_by_id(
        &self,
        assignment_id: Uuid,
    ) -> Result<Option<schedule_assignment::Model>> {
        let db = self.get_connection();
        let assignment = schedule_assignment::Entity::find_by_id(assignment_id)
            .one(db)
            .await?;
        Ok(assignment)
    }

    /// True when this exact (faculty, course, academic year) triple already
    /// exists — the duplicate-assignment guard.
    pub async fn exists(
        &self,
        faculty_id: Uuid,
        course_id: Uuid,
        academic_year: &str,
    ) -> Result<bool> {
        let db = self.get_connection();
        let existing = schedule_assignment::Entity::find()
            .filter(schedule_assignment::Column::FacultyId.eq(faculty_id))
            .filter(schedule_assignment::Column::CourseId.eq(course_id))
            .filter(schedule_assignment::Column::AcademicYear.eq(academic_year))
            .one(db)
            .await?;
        Ok(existing.is_some())
    }

    pub async fn create(
        &self,
        assignment_id: Uuid,
        faculty_id: Uuid,
        course_id: Uuid,
        academic_year: String,
        created_by_id: Option<Uuid>,
    ) -> Result<schedule_assignment::Model> {
        let db = self.get_connection();
        let assignment = schedule_assignment::ActiveModel {
            id: Set(assignment_id),
            faculty_id: Set(faculty_id),
            course_id: Set(course_id),
            academic_year: Set(academic_year),
            created_by_id: Set(created_by_id),
            created_at: Set(Utc::now().naive_utc()),
        };

        let result = assignment.insert(db).await?;
        Ok(result)
    }

    pub async fn delete(&self, assignment_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        schedule_assignment::Entity::delete_by_id(assignment_id)
            .exec(db)
            .await?;
        Ok(())
    }
}
