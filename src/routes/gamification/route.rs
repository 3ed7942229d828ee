use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use super::dto::{
    EarnedBadge, LeaderboardEntry, LeaderboardParams, LeaderboardResponse, TransactionParams,
    UserStatsResponse,
};
use crate::entities::{badge, points_transaction, user_badge};
use crate::extractor::AuthClaims;
use crate::gamification::leaderboard::{get_leaderboard, get_user_stats};
use crate::static_service::DATABASE_CONNECTION;

pub fn create_route() -> Router {
    Router::new()
        .route("/gamification/stats", get(my_stats))
        .route("/gamification/leaderboard", get(leaderboard))
        .route("/gamification/badges", get(all_badges))
        .route("/gamification/my-badges", get(my_badges))
        .route("/gamification/transactions", get(my_transactions))
}

fn db() -> Result<&'static sea_orm::DatabaseConnection, (StatusCode, String)> {
    DATABASE_CONNECTION.get().ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database not initialized".to_string(),
        )
    })
}

#[utoipa::path(
    get,
    path = "/gamification/stats",
    responses(
        (status = 200, description = "Caller's gamification stats", body = UserStatsResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Gamification"
)]
pub async fn my_stats(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<UserStatsResponse>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let stats = get_user_stats(db()?, claims.user_id, now)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let badges: Vec<EarnedBadge> = stats
        .badges
        .into_iter()
        .map(|(user_badge, badge)| EarnedBadge {
            user_badge_id: user_badge.user_badge_id,
            earned_at: user_badge.earned_at,
            progress: user_badge.progress,
            badge,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(UserStatsResponse {
            points: stats.points.points,
            level: stats.points.level,
            total_points_earned: stats.points.total_points_earned,
            streak_days: stats.points.streak_days,
            badges_count: badges.len(),
            rank: stats.rank,
            total_users: stats.total_users,
            recent_transactions: stats.recent_transactions,
            badges,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/gamification/leaderboard",
    params(LeaderboardParams),
    responses((status = 200, description = "Top users by points", body = LeaderboardResponse)),
    tag = "Gamification"
)]
pub async fn leaderboard(
    Query(params): Query<LeaderboardParams>,
) -> Result<(StatusCode, Json<LeaderboardResponse>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let leaders = get_leaderboard(db()?, params.limit, params.timeframe, now)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let leaderboard = leaders
        .into_iter()
        .enumerate()
        .map(|(idx, (points, user))| LeaderboardEntry {
            rank: idx + 1,
            user_id: points.user_id,
            username: user
                .map(|u| u.username)
                .unwrap_or_else(|| "Unknown".to_string()),
            points: points.points,
            level: points.level,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(LeaderboardResponse {
            timeframe: params.timeframe,
            leaderboard,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/gamification/badges",
    responses((status = 200, description = "Badge catalog", body = [badge::Model])),
    tag = "Gamification"
)]
pub async fn all_badges() -> Result<(StatusCode, Json<Vec<badge::Model>>), (StatusCode, String)> {
    let badges = badge::Entity::find()
        .order_by_asc(badge::Column::PointsRequired)
        .all(db()?)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    Ok((StatusCode::OK, Json(badges)))
}

#[utoipa::path(
    get,
    path = "/gamification/my-badges",
    responses(
        (status = 200, description = "Caller's earned badges", body = [EarnedBadge]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Gamification"
)]
pub async fn my_badges(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<Vec<EarnedBadge>>), (StatusCode, String)> {
    let earned = user_badge::Entity::find()
        .find_also_related(badge::Entity)
        .filter(user_badge::Column::UserId.eq(claims.user_id))
        .order_by_desc(user_badge::Column::EarnedAt)
        .all(db()?)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let result = earned
        .into_iter()
        .map(|(user_badge, badge)| EarnedBadge {
            user_badge_id: user_badge.user_badge_id,
            earned_at: user_badge.earned_at,
            progress: user_badge.progress,
            badge,
        })
        .collect();
    Ok((StatusCode::OK, Json(result)))
}

#[utoipa::path(
    get,
    path = "/gamification/transactions",
    params(TransactionParams),
    responses(
        (status = 200, description = "Recent point transactions", body = [points_transaction::Model]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Gamification"
)]
pub async fn my_transactions(
    AuthClaims(claims): AuthClaims,
    Query(params): Query<TransactionParams>,
) -> Result<(StatusCode, Json<Vec<points_transaction::Model>>), (StatusCode, String)> {
    let transactions = points_transaction::Entity::find()
        .filter(points_transaction::Column::UserId.eq(claims.user_id))
        .order_by_desc(points_transaction::Column::CreatedAt)
        .limit(params.limit)
        .all(db()?)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    Ok((StatusCode::OK, Json(transactions)))
}
