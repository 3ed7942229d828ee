use crate::entities::video_room;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

pub struct VideoRoomRepository;

impl VideoRoomRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_active_by_circle(&self, circle_id: Uuid) -> Result<Option<video_room::Model>> {
        let db = self.get_connection();
        let room = video_room::Entity::find()
            .filter(video_room::Column::CircleId.eq(circle_id))
            .filter(video_room::Column::IsActive.eq(true))
            .one(db)
            .await?;
        Ok(room)
    }

    pub async fn create(
        &self,
        circle_id: Uuid,
        room_name: String,
        jitsi_room_id: String,
        created_by: Uuid,
        now: NaiveDateTime,
    ) -> Result<video_room::Model> {
        let db = self.get_connection();
        let room = video_room::ActiveModel {
            room_id: Set(Uuid::new_v4()),
            circle_id: Set(circle_id),
            room_name: Set(room_name),
            jitsi_room_id: Set(Some(jitsi_room_id)),
            created_by: Set(created_by),
            created_at: Set(now),
            is_active: Set(true),
            last_used: Set(None),
            participant_count: Set(0),
        }
        .insert(db)
        .await?;
        Ok(room)
    }

    pub async fn touch_last_used(
        &self,
        room: video_room::Model,
        now: NaiveDateTime,
    ) -> Result<video_room::Model> {
        let db = self.get_connection();
        let mut active: video_room::ActiveModel = room.into();
        active.last_used = Set(Some(now));
        let updated = active.update(db).await?;
        Ok(updated)
    }
}
