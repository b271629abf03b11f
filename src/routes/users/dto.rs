use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    #[schema(example = "staff@example.edu")]
    pub email: Option<String>,

    #[schema(example = "password123")]
    pub password: Option<String>,

    #[schema(example = "Department Staff")]
    pub name: Option<String>,

    /// Defaults to `user`; `admin` is only accepted while no admin exists.
    #[serde(default)]
    pub role: Option<RoleEnum>,
}

impl RegisterUserRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.as_deref().unwrap_or("").is_empty()
            || self.password.as_deref().unwrap_or("").is_empty()
        {
            return Err("Email and password are required".to_string());
        }
        Ok(())
    }
}

/// User as exposed to clients; the password hash never appears here.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub role: RoleEnum,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
