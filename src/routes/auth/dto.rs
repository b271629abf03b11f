use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "admin@example.edu")]
    pub email: Option<String>,

    #[schema(example = "changeme")]
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.as_deref().unwrap_or("").is_empty()
            || self.password.as_deref().unwrap_or("").is_empty()
        {
            return Err("Email and password are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl ChangePasswordRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.current_password.as_deref().unwrap_or("").is_empty()
            || self.new_password.as_deref().unwrap_or("").is_empty()
        {
            return Err("Current password and new password are required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize, ToSchema)]
pub struct ChangePasswordResponse {
    pub message: String,
    pub email: String,
}
