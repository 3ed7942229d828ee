use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::TransactionTrait;

use super::dto::{CheckinHistoryParams, CheckinRequest};
use crate::entities::wellness_checkin;
use crate::extractor::AuthClaims;
use crate::gamification::actions::ActionType;
use crate::gamification::ledger::award_points;
use crate::gamification::streak::update_streak;
use crate::repositories::CheckinRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/checkin", post(create_checkin))
        .route("/checkins", get(checkin_history))
}

/// One check-in per calendar day. The check-in row, the streak update and
/// the point award land atomically; the streak runs first so yesterday's
/// activity date is still visible to it.
#[utoipa::path(
    post,
    path = "/checkin",
    request_body = CheckinRequest,
    responses(
        (status = 201, description = "Check-in recorded", body = wellness_checkin::Model),
        (status = 400, description = "Mood score out of range"),
        (status = 401, description = "Not authenticated"),
        (status = 409, description = "Already checked in today"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Wellness"
)]
pub async fn create_checkin(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CheckinRequest>,
) -> Result<(StatusCode, Json<wellness_checkin::Model>), (StatusCode, String)> {
    if !(1..=5).contains(&payload.mood_score) {
        return Err((
            StatusCode::BAD_REQUEST,
            "mood_score must be between 1 and 5".to_string(),
        ));
    }

    let checkin_repo = CheckinRepository::new();
    let db = checkin_repo.get_connection();
    let now = chrono::Utc::now().naive_utc();

    let already = checkin_repo
        .has_checkin_on(claims.user_id, now.date())
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    if already {
        return Err((
            StatusCode::CONFLICT,
            "Already checked in today".to_string(),
        ));
    }

    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let checkin = CheckinRepository::insert(
        &txn,
        claims.user_id,
        payload.mood_emoji,
        payload.mood_score,
        payload.note,
        payload.sprint_week,
        now,
    )
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    update_streak(&txn, claims.user_id, now).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    award_points(
        &txn,
        claims.user_id,
        ActionType::DailyCheckin,
        Some("Daily wellness check-in".to_string()),
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

    Ok((StatusCode::CREATED, Json(checkin)))
}

/// Caller's check-ins from the last `days` days, newest first.
#[utoipa::path(
    get,
    path = "/checkins",
    params(CheckinHistoryParams),
    responses(
        (status = 200, description = "Recent check-ins", body = [wellness_checkin::Model]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Wellness"
)]
pub async fn checkin_history(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<CheckinHistoryParams>,
) -> Result<(StatusCode, Json<Vec<wellness_checkin::Model>>), (StatusCode, String)> {
    let since = chrono::Utc::now().naive_utc() - chrono::Duration::days(params.days.max(0));
    let checkins = CheckinRepository::new()
        .find_recent(claims.user_id, since, None)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    Ok((StatusCode::OK, Json(checkins)))
}
