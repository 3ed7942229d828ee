use crate::entities::notification;
use crate::entities::sea_orm_active_enums::NotificationType;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

pub struct NotificationRepository;

impl NotificationRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_for_user(
        &self,
        user_id: Uuid,
        limit: u64,
        unread_only: bool,
    ) -> Result<Vec<notification::Model>> {
        let db = self.get_connection();
        let mut query =
            notification::Entity::find().filter(notification::Column::UserId.eq(user_id));
        if unread_only {
            query = query.filter(notification::Column::IsRead.eq(false));
        }
        let notifications = query
            .order_by_desc(notification::Column::CreatedAt)
            .limit(limit)
            .all(db)
            .await?;
        Ok(notifications)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        title: String,
        message: String,
        notification_type: NotificationType,
        action_url: Option<String>,
        now: NaiveDateTime,
    ) -> Result<notification::Model> {
        let db = self.get_connection();
        let notification = notification::ActiveModel {
            notification_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            title: Set(title),
            message: Set(message),
            notification_type: Set(notification_type),
            is_read: Set(false),
            action_url: Set(action_url),
            created_at: Set(now),
        }
        .insert(db)
        .await?;
        Ok(notification)
    }

    pub async fn find_owned(
        &self,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<notification::Model>> {
        let db = self.get_connection();
        let notification = notification::Entity::find_by_id(notification_id)
            .filter(notification::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(notification)
    }

    pub async fn mark_read(&self, notification: notification::Model) -> Result<notification::Model> {
        let db = self.get_connection();
        let mut active: notification::ActiveModel = notification.into();
        active.is_read = Set(true);
        let updated = active.update(db).await?;
        Ok(updated)
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64> {
        let db = self.get_connection();
        let result = notification::Entity::update_many()
            .col_expr(notification::Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(notification::Column::UserId.eq(user_id))
            .filter(notification::Column::IsRead.eq(false))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
