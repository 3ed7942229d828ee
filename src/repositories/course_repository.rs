use crate::entities::course;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

pub struct CourseRepository;

impl CourseRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_all(&self) -> Result<Vec<course::Model>> {
        let db = self.get_connection();
        let courses = course::Entity::find()
            .order_by_asc(course::Column::Code)
            .all(db)
            .await?;
        Ok(courses)
    }

    pub async fn find_by_id(&self, course_id: Uuid) -> Result<Option<course::Model>> {
        let db = self.get_connection();
        let course = course::Entity::find_by_id(course_id).one(db).await?;
        Ok(course)
    }

    pub async fn create(
        &self,
        code: String,
        title: String,
        sprint_number: Option<i32>,
        academic_year: Option<String>,
        start_date: Option<chrono::NaiveDateTime>,
        end_date: Option<chrono::NaiveDateTime>,
    ) -> Result<course::Model> {
        let db = self.get_connection();
        let course = course::ActiveModel {
            course_id: Set(Uuid::new_v4()),
            code: Set(code),
            title: Set(title),
            sprint_number: Set(sprint_number),
            academic_year: Set(academic_year),
            start_date: Set(start_date),
            end_date: Set(end_date),
        }
        .insert(db)
        .await?;
        Ok(course)
    }
}
