//! `SeaORM` Entity for users table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sea_orm_active_enums::RoleEnum;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub user_id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: RoleEnum,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::student_profile::Entity")]
    StudentProfile,
    #[sea_orm(has_many = "super::wellness_checkin::Entity")]
    WellnessCheckin,
    #[sea_orm(has_many = "super::community_post::Entity")]
    CommunityPost,
    #[sea_orm(has_many = "super::circle_member::Entity")]
    CircleMember,
    #[sea_orm(has_many = "super::points_transaction::Entity")]
    PointsTransaction,
}

impl Related<super::student_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentProfile.def()
    }
}

impl Related<super::wellness_checkin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WellnessCheckin.def()
    }
}

impl Related<super::community_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CommunityPost.def()
    }
}

impl Related<super::circle_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CircleMember.def()
    }
}

impl Related<super::points_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PointsTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
