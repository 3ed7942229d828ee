use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::{event, user};

fn default_upcoming_only() -> bool {
    true
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventListParams {
    /// Hide events whose date has passed.
    #[serde(default = "default_upcoming_only")]
    pub upcoming_only: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub event_date: chrono::NaiveDateTime,
    pub max_attendees: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventWithCreator {
    #[serde(flatten)]
    pub event: event::Model,
    pub creator: Option<user::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RsvpResponse {
    pub message: String,
    pub attendee_count: i32,
}
