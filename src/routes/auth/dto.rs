use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::{student_profile, user};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "student@srh.de")]
    pub email: String,

    /// Defaults to the part of the email before the `@`.
    pub username: Option<String>,

    #[schema(example = "password123")]
    pub password: String,

    /// Defaults to student.
    pub role: Option<RoleEnum>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TokenRequest {
    #[schema(example = "student@srh.de")]
    pub email: String,

    #[schema(example = "password123")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: user::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub user: user::Model,
    pub profile: Option<student_profile::Model>,
}
