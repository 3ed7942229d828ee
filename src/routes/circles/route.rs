use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::dto::{CircleListParams, CircleMemberDetail, MatchRequest};
use crate::circles::matching::{CircleCandidate, MatchDecision, select_circle};
use crate::entities::sea_orm_active_enums::CircleRole;
use crate::entities::study_circle;
use crate::extractor::AuthClaims;
use crate::gamification::actions::ActionType;
use crate::gamification::ledger::award_points;
use crate::repositories::{CircleRepository, CourseRepository};

pub fn create_route() -> Router {
    Router::new()
        .route("/study-circles", get(list_circles))
        .route("/study-circles/match", post(match_to_circle))
        .route("/study-circles/{circle_id}/members", get(circle_members))
}

#[utoipa::path(
    get,
    path = "/study-circles",
    params(CircleListParams),
    responses((status = 200, description = "Study circles", body = [study_circle::Model])),
    tag = "Study Circles"
)]
pub async fn list_circles(
    Query(params): Query<CircleListParams>,
) -> Result<(StatusCode, Json<Vec<study_circle::Model>>), (StatusCode, String)> {
    let circles = CircleRepository::new()
        .find_all(params.course_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    Ok((StatusCode::OK, Json(circles)))
}

/// Places the caller in the oldest active circle of the course that still
/// has room, or spins up a new circle with them as leader. Joining an
/// existing circle earns points; founding one does not.
#[utoipa::path(
    post,
    path = "/study-circles/match",
    request_body = MatchRequest,
    responses(
        (status = 200, description = "Matched to a circle", body = study_circle::Model),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Study Circles"
)]
pub async fn match_to_circle(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<MatchRequest>,
) -> Result<(StatusCode, Json<study_circle::Model>), (StatusCode, String)> {
    let circle_repo = CircleRepository::new();
    let db = circle_repo.get_connection();
    let now = chrono::Utc::now().naive_utc();

    let circles = circle_repo
        .find_active_by_course(payload.course_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let mut candidates = Vec::with_capacity(circles.len());
    for circle in &circles {
        let member_count = circle_repo.member_count(circle.circle_id).await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
        let already_member = circle_repo
            .find_membership(circle.circle_id, claims.user_id)
            .await
            .map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            })?
            .is_some();
        candidates.push(CircleCandidate {
            member_count,
            max_members: circle.max_members,
            already_member,
        });
    }

    if let MatchDecision::Join(idx) = select_circle(&candidates) {
        let circle = &circles[idx];

        // Join and award in one transaction.
        let txn = db.begin().await.map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
        CircleRepository::add_member(&txn, circle.circle_id, claims.user_id, CircleRole::Member, now)
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
            ActionType::JoinCircle,
            Some(format!("Joined {}", circle.name)),
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

        return Ok((StatusCode::OK, Json(circle.clone())));
    }

    // Every circle is full or already includes the caller; found a new one.
    let course = CourseRepository::new()
        .find_by_id(payload.course_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Course not found".to_string()))?;

    let name = format!("{} Study Circle {}", course.code, circles.len() + 1);
    let sprint_id = course.sprint_number.map(|n| format!("Sprint{}", n));

    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let circle = CircleRepository::create(&txn, course.course_id, name, sprint_id, now)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    CircleRepository::add_member(&txn, circle.circle_id, claims.user_id, CircleRole::Leader, now)
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

    Ok((StatusCode::OK, Json(circle)))
}

#[utoipa::path(
    get,
    path = "/study-circles/{circle_id}/members",
    params(("circle_id" = Uuid, Path, description = "Circle to list")),
    responses(
        (status = 200, description = "Members with profiles", body = [CircleMemberDetail]),
        (status = 404, description = "Circle not found")
    ),
    tag = "Study Circles"
)]
pub async fn circle_members(
    Path(circle_id): Path<Uuid>,
) -> Result<(StatusCode, Json<Vec<CircleMemberDetail>>), (StatusCode, String)> {
    let circle_repo = CircleRepository::new();

    circle_repo
        .find_by_id(circle_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Circle not found".to_string()))?;

    let members = circle_repo
        .members_with_profiles(circle_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let details = members
        .into_iter()
        .map(|(member, user, profile)| CircleMemberDetail {
            member_id: member.member_id,
            user,
            profile,
            joined_at: member.joined_at,
            role: member.role,
            participation_score: member.participation_score,
        })
        .collect();

    Ok((StatusCode::OK, Json(details)))
}
