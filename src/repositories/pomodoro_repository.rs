use crate::entities::pomodoro_session;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

pub struct PomodoroRepository;

impl PomodoroRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        circle_id: Option<Uuid>,
        duration_minutes: i32,
        break_minutes: i32,
        is_group_session: bool,
        now: NaiveDateTime,
    ) -> Result<pomodoro_session::Model> {
        let db = self.get_connection();
        let session = pomodoro_session::ActiveModel {
            session_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            circle_id: Set(circle_id),
            duration_minutes: Set(duration_minutes),
            break_minutes: Set(break_minutes),
            started_at: Set(now),
            ended_at: Set(None),
            completed: Set(false),
            is_group_session: Set(is_group_session),
        }
        .insert(db)
        .await?;
        Ok(session)
    }

    pub async fn find_owned(
        &self,
        session_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<pomodoro_session::Model>> {
        let db = self.get_connection();
        let session = pomodoro_session::Entity::find_by_id(session_id)
            .filter(pomodoro_session::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(session)
    }

    /// Completion happens in the caller's transaction alongside the award.
    pub async fn mark_completed<C: ConnectionTrait>(
        conn: &C,
        session: pomodoro_session::Model,
        now: NaiveDateTime,
    ) -> Result<pomodoro_session::Model> {
        let mut active: pomodoro_session::ActiveModel = session.into();
        active.ended_at = Set(Some(now));
        active.completed = Set(true);
        let updated = active.update(conn).await?;
        Ok(updated)
    }

    pub async fn find_completed(&self, user_id: Uuid) -> Result<Vec<pomodoro_session::Model>> {
        let db = self.get_connection();
        let sessions = pomodoro_session::Entity::find()
            .filter(pomodoro_session::Column::UserId.eq(user_id))
            .filter(pomodoro_session::Column::Completed.eq(true))
            .all(db)
            .await?;
        Ok(sessions)
    }

    /// Most recently started session that is neither completed nor ended.
    pub async fn find_active(&self, user_id: Uuid) -> Result<Option<pomodoro_session::Model>> {
        let db = self.get_connection();
        let session = pomodoro_session::Entity::find()
            .filter(pomodoro_session::Column::UserId.eq(user_id))
            .filter(pomodoro_session::Column::Completed.eq(false))
            .filter(pomodoro_session::Column::EndedAt.is_null())
            .order_by_desc(pomodoro_session::Column::StartedAt)
            .one(db)
            .await?;
        Ok(session)
    }
}
