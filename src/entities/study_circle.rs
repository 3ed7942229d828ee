//! `SeaORM` Entity for study_circles table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::sea_orm_active_enums::CircleStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "study_circles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub circle_id: Uuid,
    pub course_id: Uuid,
    pub name: String,
    pub sprint_id: Option<String>,
    pub status: CircleStatus,
    pub max_members: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::CourseId"
    )]
    Course,
    #[sea_orm(has_many = "super::circle_member::Entity")]
    CircleMember,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::circle_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CircleMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
