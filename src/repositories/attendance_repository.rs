use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::attendance_record;
use crate::entities::sea_orm_active_enums::AttendanceStatus;
use crate::static_service::DATABASE_CONNECTION;

#[derive(Debug, Default)]
pub struct AttendanceFilter {
    pub activity_id: Option<Uuid>,
    pub student_id: Option<Uuid>,
}

pub struct AttendanceRepository;

impl AttendanceRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(
        &self,
        filter: AttendanceFilter,
    ) -> Result<Vec<attendance_record::Model>> {
        let db = self.get_connection();
        let mut query = attendance_record::Entity::find();

        if let Some(activity_id) = filter.activity_id {
            query = query.filter(attendance_record::Column::ActivityId.eq(activity_id));
        }
        if let Some(student_id) = filter.student_id {
            query = query.filter(attendance_record::Column::StudentId.eq(student_id));
        }

        let records = query
            .order_by_desc(attendance_record::Column::RecordedAt)
            .all(db)
            .await?;
        Ok(records)
    }

    pub async fn find_by_pair(
        &self,
        student_id: Uuid,
        activity_id: Uuid,
    ) -> Result<Option<attendance_record::Model>> {
        let db = self.get_connection();
        let record = attendance_record::Entity::find()
            .filter(attendance_record::Column::StudentId.eq(student_id))
            .filter(attendance_record::Column::ActivityId.eq(activity_id))
            .one(db)
            .await?;
        Ok(record)
    }

    /// Create-or-update on the (student, activity) unique pair. Returns the
    /// row and whether it was newly created.
    pub async fn upsert(
        &self,
        student_id: Uuid,
        activity_id: Uuid,
        status: AttendanceStatus,
        notes: Option<String>,
    ) -> Result<(attendance_record::Model, bool)> {
        let db = self.get_connection();

        if let Some(existing) = self.find_by_pair(student_id, activity_id).await? {
            let mut active_model: attendance_record::ActiveModel = existing.into();
            active_model.status = Set(status);
            active_model.notes = Set(notes);
            let result = active_model.update(db).await?;
            return Ok((result, false));
        }

        let record = attendance_record::ActiveModel {
            id: Set(Uuid::new_v4()),
            student_id: Set(student_id),
            activity_id: Set(activity_id),
            status: Set(status),
            notes: Set(notes),
            recorded_at: Set(Utc::now().naive_utc()),
        };

        let result = record.insert(db).await?;
        Ok((result, true))
    }

    pub async fn update_by_pair(
        &self,
        student_id: Uuid,
        activity_id: Uuid,
        status: Option<AttendanceStatus>,
        notes: Option<String>,
    ) -> Result<attendance_record::Model> {
        let existing = self
            .find_by_pair(student_id, activity_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Attendance record not found"))?;
        let db = self.get_connection();

        let mut active_model: attendance_record::ActiveModel = existing.into();
        if let Some(status) = status {
            active_model.status = Set(status);
        }
        active_model.notes = Set(notes);

        let result = active_model.update(db).await?;
        Ok(result)
    }

    pub async fn delete_by_pair(&self, student_id: Uuid, activity_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        attendance_record::Entity::delete_many()
            .filter(attendance_record::Column::StudentId.eq(student_id))
            .filter(attendance_record::Column::ActivityId.eq(activity_id))
            .exec(db)
            .await?;
        Ok(())
    }
}
