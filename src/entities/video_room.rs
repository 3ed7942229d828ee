//! `SeaORM` Entity for video_rooms table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "video_rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub room_id: Uuid,
    pub circle_id: Uuid,
    #[sea_orm(unique)]
    pub room_name: String,
    #[sea_orm(unique)]
    pub jitsi_room_id: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime,
    pub is_active: bool,
    pub last_used: Option<DateTime>,
    pub participant_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::study_circle::Entity",
        from = "Column::CircleId",
        to = "super::study_circle::Column::CircleId"
    )]
    StudyCircle,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::UserId"
    )]
    Creator,
}

impl Related<super::study_circle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyCircle.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
