use serde::Deserialize;
use utoipa::ToSchema;

use crate::routes::users::dto::UserResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct InitRequest {
    #[schema(example = "admin@example.edu")]
    pub email: Option<String>,

    #[schema(example = "changeme")]
    pub password: Option<String>,

    #[schema(example = "Administrator")]
    pub name: Option<String>,
}

impl InitRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.as_deref().unwrap_or("").is_empty()
            || self.password.as_deref().unwrap_or("").is_empty()
            || self.name.as_deref().unwrap_or("").is_empty()
        {
            return Err("Email, password, and name are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct InitResponse {
    pub message: String,
    pub user: UserResponse,
}
