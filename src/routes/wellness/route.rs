use axum::{Json, Router, http::StatusCode, routing::get};

use crate::entities::sea_orm_active_enums::NotificationType;
use crate::extractor::AuthClaims;
use crate::repositories::{CheckinRepository, NotificationRepository};
use crate::wellness::analysis::{StressAnalysis, WeeklyStats, stress_analysis, weekly_stats};

pub fn create_route() -> Router {
    Router::new()
        .route("/wellness/stats", get(wellness_stats))
        .route("/wellness/stress-analysis", get(wellness_stress_analysis))
}

/// Rolling 7-day mood summary for the caller.
#[utoipa::path(
    get,
    path = "/wellness/stats",
    responses(
        (status = 200, description = "Weekly wellness statistics", body = WeeklyStats),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Wellness"
)]
pub async fn wellness_stats(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<WeeklyStats>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let week_ago = now - chrono::Duration::days(7);

    let checkins = CheckinRepository::new()
        .find_since_ascending(claims.user_id, week_ago)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(weekly_stats(&checkins, now.date()))))
}

/// 30-day stress pattern analysis. A strong alert (declining trend plus
/// three or more low mood days in the last week) is also persisted as an
/// alert notification pointing at peer support.
#[utoipa::path(
    get,
    path = "/wellness/stress-analysis",
    responses(
        (status = 200, description = "Stress analysis", body = StressAnalysis),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Wellness"
)]
pub async fn wellness_stress_analysis(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<StressAnalysis>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let month_ago = now - chrono::Duration::days(30);

    let checkins = CheckinRepository::new()
        .find_since_ascending(claims.user_id, month_ago)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let analysis = stress_analysis(&checkins);

    if analysis.persist_alert {
        NotificationRepository::new()
            .create(
                claims.user_id,
                "Wellness Check-In Alert".to_string(),
                analysis.alert_message.clone(),
                NotificationType::Alert,
                Some("/peer-support".to_string()),
                now,
            )
            .await
            .map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            })?;
    }

    Ok((StatusCode::OK, Json(analysis)))
}
