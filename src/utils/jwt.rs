use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::entities::sea_orm_active_enums::RoleEnum;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: String,
    pub name: String,
    pub role: RoleEnum,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtManager {
    secret: String,
}

impl JwtManager {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn create_session_token(
        &self,
        user_id: &str,
        name: &str,
        role: RoleEnum,
        expires_in: i64,
    ) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            user_id: user_id.to_string(),
            name: name.to_string(),
            role,
            iat: now,
            exp: now + expires_in,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to sign session token")
    }

    pub fn verify_token(&self, token: &str) -> Result<TokenClaims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .context("Invalid session token")?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let manager = JwtManager::new("test-secret".to_string());
        let token = manager
            .create_session_token("user-1", "Ada", RoleEnum::Admin, 3600)
            .unwrap();
        let claims = manager.verify_token(&token).unwrap();

        assert_eq!(claims.user_id, "user-1");
        assert_eq!(claims.name, "Ada");
        assert_eq!(claims.role, RoleEnum::Admin);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = JwtManager::new("secret-a".to_string())
            .create_session_token("user-1", "Ada", RoleEnum::User, 3600)
            .unwrap();

        assert!(
            JwtManager::new("secret-b".to_string())
                .verify_token(&token)
                .is_err()
        );
    }

    #[test]
    fn rejects_expired_token() {
        let manager = JwtManager::new("test-secret".to_string());
        let token = manager
            .create_session_token("user-1", "Ada", RoleEnum::User, -120)
            .unwrap();

        assert!(manager.verify_token(&token).is_err());
    }
}
