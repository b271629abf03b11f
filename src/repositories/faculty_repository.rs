use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{faculty_member, schedule_assignment};
use crate::static_service::DATABASE_CONNECTION;

pub struct FacultyRepository;

impl FacultyRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<faculty_member::Model>> {
        let db = self.get_connection();
        let faculty = faculty_member::Entity::find()
            .order_by_asc(faculty_member::Column::Name)
            .all(db)
            .await?;
        Ok(faculty)
    }

    pub async fn find_by_id(&self, faculty_id: Uuid) -> Result<Option<faculty_member::Model>> {
        let db = self.get_connection();
        let faculty = faculty_member::Entity::find_by_id(faculty_id).one(db).await?;
        Ok(faculty)
    }

    pub async fn create(
        &self,
        faculty_id: Uuid,
        name: String,
        rank: String,
        department: Option<String>,
        created_by_id: Option<Uuid>,
    ) -> Result<faculty_member::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let faculty_model = faculty_member::ActiveModel {
            id: Set(faculty_id),
            name: Set(name),
            rank: Set(rank),
            department: Set(department),
            created_by_id: Set(created_by_id),
            updated_by_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = faculty_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update(
        &self,
        faculty_id: Uuid,
        updates: FacultyUpdate,
    ) -> Result<faculty_member::Model> {
        let faculty = self
            .find_by_id(faculty_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Faculty member not found"))?;
        let db = self.get_connection();

        let mut active_model: faculty_member::ActiveModel = faculty.into();

        if let Some(name) = updates.name {
            active_model.name = Set(name);
        }
        if let Some(rank) = updates.rank {
            active_model.rank = Set(rank);
        }
        // Nullable field is replaced wholesale, matching PUT semantics
        active_model.department = Set(updates.department);
        active_model.updated_by_id = Set(updates.updated_by_id);
        active_model.updated_at = Set(Utc::now().naive_utc());

        let result = active_model.update(db).await?;
        Ok(result)
    }

    /// Removes the faculty member and every schedule assignment referencing
    /// it as one atomic transaction.
    pub async fn delete_with_assignments(&self, faculty_id: Uuid) -> Result<()> {
        let db = self.get_connection();
        let txn = db.begin().await?;

        schedule_assignment::Entity::delete_many()
            .filter(schedule_assignment::Column::FacultyId.eq(faculty_id))
            .exec(&txn)
            .await?;

        faculty_member::Entity::delete_by_id(faculty_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}

pub struct FacultyUpdate {
    pub name: Option<String>,
    pub rank: Option<String>,
    pub department: Option<String>,
    pub updated_by_id: Option<Uuid>,
}
