use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{CreateVideoRoomRequest, VideoRoomLookupResponse, VideoRoomResponse};
use crate::extractor::AuthClaims;
use crate::repositories::{CircleRepository, VideoRoomRepository};

const JITSI_BASE_URL: &str = "https://meet.jit.si";

fn jitsi_url(room_name: &str) -> String {
    format!("{}/{}", JITSI_BASE_URL, room_name)
}

pub fn create_route() -> Router {
    Router::new()
        .route("/video-rooms/create", post(create_room))
        .route("/video-rooms/{circle_id}", get(get_room))
}

/// Get-or-create the circle's video room. Only circle members may call
/// this; every call stamps `last_used`.
#[utoipa::path(
    post,
    path = "/video-rooms/create",
    request_body = CreateVideoRoomRequest,
    responses(
        (status = 200, description = "Room ready", body = VideoRoomResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a circle member"),
        (status = 404, description = "Circle not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Video Rooms"
)]
pub async fn create_room(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateVideoRoomRequest>,
) -> Result<(StatusCode, Json<VideoRoomResponse>), (StatusCode, String)> {
    let circle_repo = CircleRepository::new();
    let room_repo = VideoRoomRepository::new();
    let now = chrono::Utc::now().naive_utc();

    circle_repo
        .find_by_id(payload.circle_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Circle not found".to_string()))?;

    let membership = circle_repo
        .find_membership(payload.circle_id, claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    if membership.is_none() {
        return Err((
            StatusCode::FORBIDDEN,
            "You must be a circle member".to_string(),
        ));
    }

    let existing = room_repo
        .find_active_by_circle(payload.circle_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let room = match existing {
        Some(room) => room,
        None => {
            let circle_key = payload.circle_id.simple().to_string();
            let room_name = format!("SprintConnect-Circle-{}", &circle_key[..12]);
            let jitsi_room_id = format!(
                "SprintConnect-{}-{}",
                &circle_key[..12],
                &Uuid::new_v4().simple().to_string()[..8]
            );
            room_repo
                .create(payload.circle_id, room_name, jitsi_room_id, claims.user_id, now)
                .await
                .map_err(|e| {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Database error: {}", e),
                    )
                })?
        }
    };

    let room = room_repo.touch_last_used(room, now).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let room_name = room.room_name.clone();
    Ok((
        StatusCode::OK,
        Json(VideoRoomResponse {
            jitsi_url: jitsi_url(&room_name),
            room,
            room_name,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/video-rooms/{circle_id}",
    params(("circle_id" = Uuid, Path, description = "Circle to look up")),
    responses(
        (status = 200, description = "Room lookup result", body = VideoRoomLookupResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Video Rooms"
)]
pub async fn get_room(
    AuthClaims(_claims): AuthClaims,
    Path(circle_id): Path<Uuid>,
) -> Result<(StatusCode, Json<VideoRoomLookupResponse>), (StatusCode, String)> {
    let room = VideoRoomRepository::new()
        .find_active_by_circle(circle_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = match room {
        None => VideoRoomLookupResponse {
            exists: false,
            room: None,
            jitsi_url: None,
        },
        Some(room) => VideoRoomLookupResponse {
            exists: true,
            jitsi_url: Some(jitsi_url(&room.room_name)),
            room: Some(room),
        },
    };

    Ok((StatusCode::OK, Json(response)))
}
