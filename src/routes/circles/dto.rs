use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::sea_orm_active_enums::CircleRole;
use crate::entities::{student_profile, user};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CircleListParams {
    /// Restrict to circles of one course.
    pub course_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MatchRequest {
    pub course_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CircleMemberDetail {
    pub member_id: Uuid,
    pub user: Option<user::Model>,
    pub profile: Option<student_profile::Model>,
    pub joined_at: chrono::NaiveDateTime,
    pub role: CircleRole,
    pub participation_score: f64,
}
