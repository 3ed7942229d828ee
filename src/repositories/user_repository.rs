use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find_by_id(user_id).one(db).await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>> {
        let db = self.get_connection();
        let user = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await?;
        Ok(user)
    }

    pub async fn create(
        &self,
        email: String,
        username: String,
        password_hash: String,
        role: RoleEnum,
    ) -> Result<user::Model> {
        let db = self.get_connection();
        let now = chrono::Utc::now().naive_utc();
        let user = user::ActiveModel {
            user_id: Set(Uuid::new_v4()),
            email: Set(email),
            username: Set(username),
            password: Set(password_hash),
            role: Set(role),
            is_active: Set(true),
            created_at: Set(now),
        }
        .insert(db)
        .await?;
        Ok(user)
    }

    pub async fn count(&self) -> Result<u64> {
        let db = self.get_connection();
        let total = user::Entity::find().count(db).await?;
        Ok(total)
    }
}
