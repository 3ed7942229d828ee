use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::dto::{CreateEventRequest, EventListParams, EventWithCreator, RsvpResponse};
use crate::extractor::AuthClaims;
use crate::gamification::actions::ActionType;
use crate::gamification::ledger::award_points;
use crate::repositories::{EventRepository, UserRepository};

pub fn create_route() -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/events", post(create_event))
        .route("/events/{event_id}/rsvp", post(rsvp_event))
}

#[utoipa::path(
    get,
    path = "/events",
    params(EventListParams),
    responses((status = 200, description = "Events, soonest first", body = [EventWithCreator])),
    tag = "Events"
)]
pub async fn list_events(
    Query(params): Query<EventListParams>,
) -> Result<(StatusCode, Json<Vec<EventWithCreator>>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let events = EventRepository::new()
        .find_with_creators(params.upcoming_only, now, None)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let result = events
        .into_iter()
        .map(|(event, creator)| EventWithCreator { event, creator })
        .collect();
    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = EventWithCreator),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn create_event(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventWithCreator>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let event = EventRepository::new()
        .create(
            claims.user_id,
            payload.title,
            payload.description,
            payload.location,
            payload.event_date,
            payload.max_attendees,
            now,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let creator = UserRepository::new()
        .find_by_id(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((StatusCode::CREATED, Json(EventWithCreator { event, creator })))
}

/// RSVP to an event. The attendee row, the counter bump and the points
/// award commit together.
#[utoipa::path(
    post,
    path = "/events/{event_id}/rsvp",
    params(("event_id" = Uuid, Path, description = "Event to RSVP to")),
    responses(
        (status = 200, description = "RSVP recorded", body = RsvpResponse),
        (status = 400, description = "Event is full"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Event not found"),
        (status = 409, description = "Already RSVP'd")
    ),
    security(("bearer_auth" = [])),
    tag = "Events"
)]
pub async fn rsvp_event(
    AuthClaims(claims): AuthClaims,
    Path(event_id): Path<Uuid>,
) -> Result<(StatusCode, Json<RsvpResponse>), (StatusCode, String)> {
    let event_repo = EventRepository::new();
    let db = event_repo.get_connection();
    let now = chrono::Utc::now().naive_utc();

    let event = event_repo
        .find_by_id(event_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Event not found".to_string()))?;

    let existing = event_repo
        .find_rsvp(event_id, claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    if existing.is_some() {
        return Err((StatusCode::CONFLICT, "Already RSVP'd".to_string()));
    }

    if let Some(max) = event.max_attendees {
        if event.attendee_count >= max {
            return Err((StatusCode::BAD_REQUEST, "Event is full".to_string()));
        }
    }

    let event_title = event.title.clone();
    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let updated = EventRepository::add_rsvp(&txn, event, claims.user_id, now)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    award_points(
        &txn,
        claims.user_id,
        ActionType::EventRsvp,
        Some(format!("RSVP'd to {}", event_title)),
        now,
    )
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    txn.commit().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok((
        StatusCode::OK,
        Json(RsvpResponse {
            message: "RSVP successful".to_string(),
            attendee_count: updated.attendee_count,
        }),
    ))
}
