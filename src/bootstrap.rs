use anyhow::{Context, Result};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::config::APP_CONFIG;
use crate::entities::{sea_orm_active_enums::RoleEnum, user};

/// Creates the first admin account at startup when ADMIN_EMAIL and
/// ADMIN_PASSWORD are configured. Does nothing once an admin exists,
/// so POST /init and this path never fight each other.
pub async fn initialize_admin_user(db: &DatabaseConnection) -> Result<()> {
    let (admin_email, admin_password) = match (&APP_CONFIG.admin_email, &APP_CONFIG.admin_password)
    {
        (Some(email), Some(password)) => (email, password),
        _ => {
            tracing::info!("Admin bootstrap credentials not configured, skipping");
            return Ok(());
        }
    };

    let existing_admin = user::Entity::find()
        .filter(user::Column::Role.eq(RoleEnum::Admin))
        .one(db)
        .await
        .context("Failed to check existing admin")?;

    if existing_admin.is_some() {
        tracing::info!("Admin user already exists, skipping initialization");
        return Ok(());
    }

    tracing::info!("Creating default admin user...");

    let hashed_password = bcrypt::hash(admin_password, bcrypt::DEFAULT_COST)
        .context("Failed to hash admin password")?;

    let now = Utc::now().naive_utc();
    let admin_user = user::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(admin_email.to_string()),
        password: Set(hashed_password),
        name: Set(Some("Administrator".to_string())),
        role: Set(RoleEnum::Admin),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };

    admin_user
        .insert(db)
        .await
        .context("Failed to insert admin user")?;

    tracing::info!("Admin user created");
    tracing::info!("  Email: {}", admin_email);
    tracing::warn!("Please change the default password after first login");

    Ok(())
}
