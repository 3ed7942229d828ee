//! `SeaORM` Entity for courses table

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, ToSchema)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    #[serde(skip_deserializing)]
    pub course_id: Uuid,
    pub code: String,
    pub title: String,
    pub sprint_number: Option<i32>,
    pub academic_year: Option<String>,
    pub start_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::study_circle::Entity")]
    StudyCircle,
}

impl Related<super::study_circle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudyCircle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
