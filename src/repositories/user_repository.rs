use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user;
use crate::static_service::DATABASE_CONNECTION;

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find_by_id(user_id).one(db).await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?;
        Ok(user)
    }

    /// Used by /init and /users/register: only one admin may ever exist.
    pub async fn find_admin(&self) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let admin = user::Entity::find()
            .filter(user::Column::Role.eq(RoleEnum::Admin))
            .one(db)
            .await?;
        Ok(admin)
    }

    /// Batch lookup for shaping createdBy/updatedBy projections.
    pub async fn find_by_ids(&self, ids: Vec<Uuid>) -> Result<Vec<user::Model>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let db = self.get_connection();
        let users = user::Entity::find()
            .filter(user::Column::Id.is_in(ids))
            .all(db)
            .await?;
        Ok(users)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        email: String,
        password_hash: String,
        name: Option<String>,
        role: RoleEnum,
    ) -> Result<user::Model> {
        let db = self.get_connection();
        let now = Utc::now().naive_utc();
        let user_model = user::ActiveModel {
            id: Set(user_id),
            email: Set(email),
            password: Set(password_hash),
            name: Set(name),
            role: Set(role),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = user_model.insert(db).await?;
        Ok(result)
    }

    pub async fn update_password(&self, user_id: Uuid, password_hash: String) -> Result<user::Model> {
        let user = self
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("User not found"))?;
        let db = self.get_connection();

        let mut active_user: user::ActiveModel = user.into();
        active_user.password = Set(password_hash);
        active_user.updated_at = Set(Utc::now().naive_utc());

        let result = active_user.update(db).await?;
        Ok(result)
    }
}
