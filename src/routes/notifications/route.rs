use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::{MessageResponse, NotificationListParams};
use crate::entities::notification;
use crate::extractor::AuthClaims;
use crate::repositories::NotificationRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/{notification_id}/read", post(mark_read))
        .route("/notifications/read-all", post(mark_all_read))
}

#[utoipa::path(
    get,
    path = "/notifications",
    params(NotificationListParams),
    responses(
        (status = 200, description = "Caller's notifications, newest first", body = [notification::Model]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<NotificationListParams>,
) -> Result<(StatusCode, Json<Vec<notification::Model>>), (StatusCode, String)> {
    let notifications = NotificationRepository::new()
        .find_for_user(claims.user_id, params.limit, params.unread_only)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    Ok((StatusCode::OK, Json(notifications)))
}

#[utoipa::path(
    post,
    path = "/notifications/{notification_id}/read",
    params(("notification_id" = Uuid, Path, description = "Notification to mark")),
    responses(
        (status = 200, description = "Marked as read", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Notification not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_read(
    AuthClaims(claims): AuthClaims,
    Path(notification_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, String)> {
    let notification_repo = NotificationRepository::new();

    let notification = notification_repo
        .find_owned(notification_id, claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Notification not found".to_string()))?;

    notification_repo.mark_read(notification).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Notification marked as read".to_string(),
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/notifications/read-all",
    responses(
        (status = 200, description = "All marked as read", body = MessageResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Notifications"
)]
pub async fn mark_all_read(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, String)> {
    NotificationRepository::new()
        .mark_all_read(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "All notifications marked as read".to_string(),
        }),
    ))
}
