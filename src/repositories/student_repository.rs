use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{attendance_record, group_member, student};
use crate::static_service::DATABASE_CONNECTION;

pub struct StudentRepository;

impl StudentRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<student::Model>> {
        let db = self.get_connection();
        let students = student::Entity::find()
            .order_by_desc(student::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(students)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<student::Model>> {
        let db = self.get_connection();
        let student = student::Entity::find_by_id(id).one(db).await?;
        Ok(student)
    }

    /// Lookup by the business student number (the natural key), not the
    /// generated primary id.
    pub async fn find_by_student_number(&self, student_id: &str) -> Result<Option<student::Model>> {
        let db = self.get_connection();
        let student = student::Entity::find()
            .filter(student::Column::StudentId.eq(student_id))
            .one(db)
            .await?;
        Ok(student)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<student::Model>> {
        let db = self.get_connection();
        let student = student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .one(db)
            .await?;
        Ok(student)
    }

    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<student::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.get_connection();
        let students = student::Entity::find()
            .filter(student::Column::Id.is_in(ids))
            .all(db)
            .await?;
        Ok(students)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        id: Uuid,
        name: String,
        student_id: String,
        email: Option<String>,
        gender: Option<String>,
        year: String,
        semester: i32,
        section: Option<String>,
        phone: Option<String>,
        notes: Option<String>,
        created_by_id: Option<Uuid>,
    ) -> Result<student::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let student_model = student::ActiveModel {
            id: Set(id),
            name: Set(name),
            student_id: Set(student_id),
            email: Set(email),
            gender: Set(gender),
            year: Set(year),
            semester: Set(semester),
            section: Set(section),
            phone: Set(phone),
            notes: Set(notes),
            created_by_id: Set(created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = student_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(&self, id: Uuid, updates: StudentUpdate) -> Result<student::Model> {
        let student = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Student not found"))?;
        let db = self.get_connection();

        let mut active_model: student::ActiveModel = student.into();

        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(student_id) = updates.student_id {
            active_model.student_id = Set(student_id);
        }
        if let Some(year) = updates.year {
            active_model.year = Set(year);
        }
        if let Some(semester) = updates.semester {
            active_model.semester = Set(semester);
        }
        active_model.email = Set(updates.email);
        active_model.gender = Set(updates.gender);
        active_model.section = Set(updates.section);
        active_model.phone = Set(updates.phone);
        active_model.notes = Set(updates.notes);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    /// Removes the student together with group memberships and attendance
    /// rows in one atomic transaction.
    pub async fn delete_with_children(&self, id: Uuid) -> Result<()> {
        let db = self.get_connection();
        let txn = db.begin().await?;

        group_member::Entity::delete_many()
            .filter(group_member::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;

        attendance_record::Entity::delete_many()
            .filter(attendance_record::Column::StudentId.eq(id))
            .exec(&txn)
            .await?;

        student::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

#[derive(Default)]
pub struct StudentUpdate {
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
