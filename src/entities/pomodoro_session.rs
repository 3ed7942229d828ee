//! `SeaORM` Entity for pomodoro_sessions table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "pomodoro_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub session_id: Uuid,
    pub user_id: Uuid,
    pub circle_id: Option<Uuid>,
    pub duration_minutes: i32,
    pub break_minutes: i32,
    pub started_at: DateTime,
    pub ended_at: Option<DateTime>,
    pub completed: bool,
    pub is_group_session: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::study_circle::Entity",
        from = "Column::CircleId",
        to = "super::study_circle::Column::CircleId"
    )]
    StudyCircle,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::study_circle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyCircle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
