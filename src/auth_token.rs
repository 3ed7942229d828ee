use anyhow::Result;
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::RoleEnum;

/// Claims carried by every access token. `sub` is the user's email, the
/// rest lets handlers authorize without a user lookup per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub user_id: Uuid,
    pub username: String,
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

    pub fn create_jwt(
        &self,
        email: &str,
        user_id: Uuid,
        username: &str,
        role: RoleEnum,
        expires_in_seconds: i64,
    ) -> Result<String> {
        let now = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: email.to_string(),
            user_id,
            username: username.to_string(),
            role,
            iat: now,
            exp: now + expires_in_seconds,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )?;
        Ok(token)
    }

    pub fn verify_jwt(&self, token: &str) -> Result<TokenClaims> {
        let data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_claims() {
        let manager = JwtManager::new("test-secret".to_string());
        let user_id = Uuid::new_v4();
        let token = manager
            .create_jwt("alice@example.com", user_id, "alice", RoleEnum::Student, 3600)
            .unwrap();

        let claims = manager.verify_jwt(&token).unwrap();
        assert_eq!(claims.sub, "alice@example.com");
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.role, RoleEnum::Student);
    }

    #[test]
    fn rejects_expired_token() {
        let manager = JwtManager::new("test-secret".to_string());
        let token = manager
            .create_jwt("bob@example.com", Uuid::new_v4(), "bob", RoleEnum::Student, -3600)
            .unwrap();

        assert!(manager.verify_jwt(&token).is_err());
    }

    #[test]
    fn rejects_wrong_secret() {
        let manager = JwtManager::new("test-secret".to_string());
        let token = manager
            .create_jwt("eve@example.com", Uuid::new_v4(), "eve", RoleEnum::Admin, 3600)
            .unwrap();

        let other = JwtManager::new("other-secret".to_string());
        assert!(other.verify_jwt(&token).is_err());
    }
}
