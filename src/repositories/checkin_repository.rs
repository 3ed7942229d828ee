use crate::entities::wellness_checkin;
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

pub struct CheckinRepository;

impl CheckinRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn has_checkin_on(&self, user_id: Uuid, day: NaiveDate) -> Result<bool> {
        let db = self.get_connection();
        let start = day.and_hms_opt(0, 0, 0).unwrap_or_default();
        let count = wellness_checkin::Entity::find()
            .filter(wellness_checkin::Column::UserId.eq(user_id))
            .filter(wellness_checkin::Column::CreatedAt.gte(start))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Inserted inside the same transaction as the streak update and the
    /// check-in award.
    pub async fn insert<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        mood_emoji: String,
        mood_score: i32,
        note: Option<String>,
        sprint_week: Option<String>,
        now: NaiveDateTime,
    ) -> Result<wellness_checkin::Model> {
        let checkin = wellness_checkin::ActiveModel {
            checkin_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            mood_emoji: Set(mood_emoji),
            mood_score: Set(mood_score),
            note: Set(note),
            sprint_week: Set(sprint_week),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;
        Ok(checkin)
    }

    /// Newest first, for the check-in history endpoint.
    pub async fn find_recent(
        &self,
        user_id: Uuid,
        since: NaiveDateTime,
        limit: Option<u64>,
    ) -> Result<Vec<wellness_checkin::Model>> {
        let db = self.get_connection();
        let mut query = wellness_checkin::Entity::find()
            .filter(wellness_checkin::Column::UserId.eq(user_id))
            .filter(wellness_checkin::Column::CreatedAt.gte(since))
            .order_by_desc(wellness_checkin::Column::CreatedAt);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        let checkins = query.all(db).await?;
        Ok(checkins)
    }

    /// Oldest first, the order the analysis functions expect.
    pub async fn find_since_ascending(
        &self,
        user_id: Uuid,
        since: NaiveDateTime,
    ) -> Result<Vec<wellness_checkin::Model>> {
        let db = self.get_connection();
        let checkins = wellness_checkin::Entity::find()
            .filter(wellness_checkin::Column::UserId.eq(user_id))
            .filter(wellness_checkin::Column::CreatedAt.gte(since))
            .order_by_asc(wellness_checkin::Column::CreatedAt)
            .all(db)
            .await?;
        Ok(checkins)
    }

    pub async fn count_since(&self, since: NaiveDateTime) -> Result<u64> {
        let db = self.get_connection();
        let count = wellness_checkin::Entity::find()
            .filter(wellness_checkin::Column::CreatedAt.gte(since))
            .count(db)
            .await?;
        Ok(count)
    }

    /// Platform-wide average mood since `since`; `None` without check-ins.
    pub async fn average_mood_since(&self, since: NaiveDateTime) -> Result<Option<f64>> {
        let db = self.get_connection();
        let average: Option<f64> = wellness_checkin::Entity::find()
            .select_only()
            .column_as(wellness_checkin::Column::MoodScore.sum(), "total")
            .filter(wellness_checkin::Column::CreatedAt.gte(since))
            .into_tuple::<Option<i64>>()
            .one(db)
            .await?
            .flatten()
            .map(|total| total as f64);
        match average {
            None => Ok(None),
            Some(total) => {
                let count = self.count_since(since).await?;
                if count == 0 {
                    Ok(None)
                } else {
                    Ok(Some(total / count as f64))
                }
            }
        }
    }
}
