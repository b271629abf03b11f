use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{group_member, student, student_group};
use crate::static_service::DATABASE_CONNECTION;

pub struct GroupRepository;

impl GroupRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<student_group::Model>> {
        let db = self.get_connection();
        let groups = student_group::Entity::find()
            .order_by_desc(student_group::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(groups)
    }

    pub async fn find_by_id(&self, group_id: Uuid) -> Result<Option<student_group::Model>> {
        let db = self.get_connection();
        let group = student_group::Entity::find_by_id(group_id).one(db).await?;
        Ok(group)
    }

    /// Batch lookup for nesting group projections into activity responses.
    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<student_group::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.get_connection();
        let groups = student_group::Entity::find()
            .filter(student_group::Column::Id.is_in(ids))
            .all(db)
            .await?;
        Ok(groups)
    }

    /// Memberships with their student rows, oldest membership first.
    pub async fn members_with_students(
        &self,
        group_id: Uuid,
    ) -> Result<Vec<(group_member::Model, Option<student::Model>)>> {
        let db = self.get_connection();
        let members = group_member::Entity::find()
            .filter(group_member::Column::GroupId.eq(group_id))
            .order_by_asc(group_member::Column::JoinedAt)
            .find_also_related(student::Entity)
            .all(db)
            .await?;
        Ok(members)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        group_id: Uuid,
        name: String,
        description: Option<String>,
        course_id: Option<Uuid>,
        year: Option<String>,
        semester: Option<i32>,
        section: Option<String>,
        max_size: Option<i32>,
        created_by_id: Option<Uuid>,
    ) -> Result<student_group::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let group_model = student_group::ActiveModel {
            id: Set(group_id),
            name: Set(name),
            description: Set(description),
            course_id: Set(course_id),
            year: Set(year),
            semester: Set(semester),
            section: Set(section),
            max_size: Set(max_size),
            created_by_id: Set(created_by_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = group_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        group_id: Uuid,
        updates: GroupUpdate,
    ) -> Result<student_group::Model> {
        let group = self
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Group not found"))?;
        let db = self.get_connection();

        let mut active_model: student_group::ActiveModel = group.into();

        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        active_model.description = Set(updates.description);
        active_model.course_id = Set(updates.course_id);
        active_model.year = Set(updates.year);
        active_model.semester = Set(updates.semester);
        active_model.section = Set(updates.section);
        active_model.max_size = Set(updates.max_size);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    /// Removes the group and its memberships in one atomic transaction.
    pub async fn delete_with_members(&self, group_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        let txn = db.begin().await?;

        group_member::Entity::delete_many()
            .filter(group_member::Column::GroupId.eq(group_id))
            .exec(&txn)
            .await?;

        student_group::Entity::delete_by_id(group_id).exec(&txn).await?;

        txn.commit().await?;
        Ok(())
    }
}

pub struct GroupUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub course_id: Option<Uuid>,
    pub year: Option<String>,
    pub semester: Option<i32>,
    pub section: Option<String>,
    pub max_size: Option<i32>,
}
