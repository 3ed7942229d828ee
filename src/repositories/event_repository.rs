use crate::entities::{event, event_attendee, user};
use crate::static_service::DATABASE_CONNECTION;
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

pub struct EventRepository;

impl EventRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn get_connection(&self) -> &'static DatabaseConnection {
        DATABASE_CONNECTION
            .get()
            .expect("DATABASE_CONNECTION not set")
    }

    pub async fn find_with_creators(
        &self,
        upcoming_only: bool,
        now: NaiveDateTime,
        limit: Option<u64>,
    ) -> Result<Vec<(event::Model, Option<user::Model>)>> {
        let db = self.get_connection();
        let mut query = event::Entity::find().find_also_related(user::Entity);
        if upcoming_only {
            query = query.filter(event::Column::EventDate.gte(now));
        }
        query = query.order_by_asc(event::Column::EventDate);
        if let Some(limit) = limit {
            query = query.limit(limit);
        }
        let events = query.all(db).await?;
        Ok(events)
    }

    pub async fn find_by_id(&self, event_id: Uuid) -> Result<Option<event::Model>> {
        let db = self.get_connection();
        let event = event::Entity::find_by_id(event_id).one(db).await?;
        Ok(event)
    }

    pub async fn create(
        &self,
        creator_id: Uuid,
        title: String,
        description: Option<String>,
        location: Option<String>,
        event_date: NaiveDateTime,
        max_attendees: Option<i32>,
        now: NaiveDateTime,
    ) -> Result<event::Model> {
        let db = self.get_connection();
        let event = event::ActiveModel {
            event_id: Set(Uuid::new_v4()),
            creator_id: Set(creator_id),
            title: Set(title),
            description: Set(description),
            location: Set(location),
            event_date: Set(event_date),
            attendee_count: Set(0),
            max_attendees: Set(max_attendees),
            created_at: Set(now),
        }
        .insert(db)
        .await?;
        Ok(event)
    }

    pub async fn find_rsvp(
        &self,
        event_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<event_attendee::Model>> {
        let db = self.get_connection();
        let rsvp = event_attendee::Entity::find()
            .filter(event_attendee::Column::EventId.eq(event_id))
            .filter(event_attendee::Column::UserId.eq(user_id))
            .one(db)
            .await?;
        Ok(rsvp)
    }

    /// RSVP row plus the bumped attendee count, in the caller's transaction.
    pub async fn add_rsvp<C: ConnectionTrait>(
        conn: &C,
        event: event::Model,
        user_id: Uuid,
        now: NaiveDateTime,
    ) -> Result<event::Model> {
        event_attendee::ActiveModel {
            attendee_id: Set(Uuid::new_v4()),
            event_id: Set(event.event_id),
            user_id: Set(user_id),
            rsvp_at: Set(now),
        }
        .insert(conn)
        .await?;

        let attendee_count = event.attendee_count + 1;
        let mut active: event::ActiveModel = event.into();
        active.attendee_count = Set(attendee_count);
        let updated = active.update(conn).await?;
        Ok(updated)
    }

    pub async fn count_upcoming(&self, now: NaiveDateTime) -> Result<u64> {
        let db = self.get_connection();
        let count = event::Entity::find()
            .filter(event::Column::EventDate.gte(now))
            .count(db)
            .await?;
        Ok(count)
    }
}
