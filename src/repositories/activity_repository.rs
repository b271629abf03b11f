use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{activity, attendance_record, student};
use crate::static_service::DATABASE_CONNECTION;

pub struct ActivityRepository;

impl ActivityRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<activity::Model>> {
        let db = self.get_connection();
        let activities = activity::Entity::find()
            .order_by_desc(activity::Column::StartDate)
            .all(db)
            .await?;
        Ok(activities)
    }

    pub async fn find_by_id(&self, activity_id: Uuid) -> Result<Option<activity::Model>> {
        let db = self.get_connection();
        let activity = activity::Entity::find_by_id(activity_id).one(db).await?;
        Ok(activity)
    }

    /// Batch lookup for nesting activity projections into attendance rows.
    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<activity::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.get_connection();
        let activities = activity::Entity::find()
            .filter(activity::Column::Id.is_in(ids))
            .all(db)
            .await?;
        Ok(activities)
    }

    /// Attendance rows for an activity with their student rows, for the
    /// nested projection in activity responses.
    pub async fn attendance_with_students(
        &self,
        activity_id: Uuid,
    ) -> Result<Vec<(attendance_record::Model, Option<student::Model>)>> {
        let db = self.get_connection();
        let records = attendance_record::Entity::find()
            .filter(attendance_record::Column::ActivityId.eq(activity_id))
            .find_also_related(student::Entity)
            .all(db)
            .await?;
        Ok(records)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        activity_id: Uuid,
        title: String,
        description: Option<String>,
        activity_type: String,
        course_id: Option<Uuid>,
        group_id: Option<Uuid>,
        start_date: NaiveDateTime,
        end_date: Option<NaiveDateTime>,
        location: Option<String>,
        max_score: Option<i32>,
        section: Option<String>,
        created_by_id: Option<Uuid>,
    ) -> Result<activity::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let activity_model = activity::ActiveModel {
            id: Set(activity_id),
            title: Set(title),
            description: Set(description),
            activity_type: Set(activity_type),
            course_id: Set(course_id),
            group_id: Set(group_id),
            start_date: Set(start_date),
            end_date: Set(end_date),
            location: Set(location),
            max_score: Set(max_score),
            section: Set(section),
            created_by_id: Set(created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = activity_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        activity_id: Uuid,
        updates: ActivityUpdate,
    ) -> Result<activity::Model> {
        let activity = self
            .find_by_id(activity_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Activity not found"))?;
        let db = self.get_connection();

        let mut active_model: activity::ActiveModel = activity.into();

        if let Some(title) = updates.title {
            active_model.title = Set(title);
        }
        if let Some(activity_type) = updates.activity_type {
            active_model.activity_type = Set(activity_type);
        }
        if let Some(start_date) = updates.start_date {
            active_model.start_date = Set(start_date);
        }
        active_model.description = Set(updates.description);
        active_model.course_id = Set(updates.course_id);
        active_model.group_id = Set(updates.group_id);
        active_model.end_date = Set(updates.end_date);
        active_model.location = Set(updates.location);
        active_model.max_score = Set(updates.max_score);
        active_model.section = Set(updates.section);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    /// Removes the activity and its attendance rows in one atomic
    /// transaction.
    pub async fn delete_with_attendance(&self, activity_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        let txn = db.begin().await?;

        attendance_record::Entity::delete_many()
            .filter(attendance_record::Column::ActivityId.eq(activity_id))
            .exec(&txn)
            .await?;

        activity::Entity::delete_by_id(activity_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

pub struct ActivityUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub activity_type: Option<String>,
    pub course_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub max_score: Option<i32>,
    pub section: Option<String>,
}
