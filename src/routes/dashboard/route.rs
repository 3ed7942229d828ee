use axum::{Json, Router, http::StatusCode, routing::get};

use super::dto::{AdminStats, StudentDashboard};
use crate::entities::sea_orm_active_enums::{CircleStatus, RoleEnum};
use crate::extractor::AuthClaims;
use crate::repositories::{
    CheckinRepository, CircleRepository, EventRepository, PostRepository, ProfileRepository,
    UserRepository,
};

pub fn create_route() -> Router {
    Router::new()
        .route("/dashboard", get(student_dashboard))
        .route("/admin/stats", get(admin_stats))
}

/// Everything the student home screen shows, in one request.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Student dashboard", body = StudentDashboard),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User no longer exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn student_dashboard(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<StudentDashboard>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let week_ago = now - chrono::Duration::days(7);

    let user = UserRepository::new()
        .find_by_id(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "User not found".to_string()))?;

    let profile = ProfileRepository::new()
        .find_by_user(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let circle_repo = CircleRepository::new();
    let memberships = circle_repo
        .memberships_for_user(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    let mut active_circles = Vec::with_capacity(memberships.len());
    for membership in memberships {
        let circle = circle_repo.find_by_id(membership.circle_id).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
        if let Some(circle) = circle {
            if circle.status == CircleStatus::Active {
                active_circles.push(circle);
            }
        }
    }

    let recent_checkins = CheckinRepository::new()
        .find_recent(claims.user_id, week_ago, Some(7))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let upcoming_events = EventRepository::new()
        .find_with_creators(true, now, Some(5))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .into_iter()
        .map(|(event, _)| event)
        .collect();

    let community_posts = PostRepository::new()
        .find_recent(None, 10)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .into_iter()
        .map(|(post, _)| post)
        .collect();

    Ok((
        StatusCode::OK,
        Json(StudentDashboard {
            user,
            profile,
            active_circles,
            recent_checkins,
            upcoming_events,
            community_posts,
        }),
    ))
}

/// Platform-wide counters. Admin only.
#[utoipa::path(
    get,
    path = "/admin/stats",
    responses(
        (status = 200, description = "Admin statistics", body = AdminStats),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer_auth" = [])),
    tag = "Dashboard"
)]
pub async fn admin_stats(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<AdminStats>), (StatusCode, String)> {
    if claims.role != RoleEnum::Admin {
        return Err((StatusCode::FORBIDDEN, "Admin access required".to_string()));
    }

    let now = chrono::Utc::now().naive_utc();
    let week_ago = now - chrono::Duration::days(7);
    let start_of_today = now.date().and_hms_opt(0, 0, 0).unwrap_or(now);

    let checkin_repo = CheckinRepository::new();

    let total_users = UserRepository::new().count().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let active_study_circles = CircleRepository::new().count_active().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let wellness_checkins_today = checkin_repo.count_since(start_of_today).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let community_posts_this_week = PostRepository::new()
        .count_since(week_ago)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    let average_mood_score = checkin_repo
        .average_mood_since(week_ago)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .unwrap_or(0.0);
    let upcoming_events = EventRepository::new().count_upcoming(now).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok((
        StatusCode::OK,
        Json(AdminStats {
            total_users,
            active_study_circles,
            wellness_checkins_today,
            community_posts_this_week,
            average_mood_score,
            upcoming_events,
        }),
    ))
}
