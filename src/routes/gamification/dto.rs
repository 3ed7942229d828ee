use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::entities::{badge, points_transaction};
use crate::gamification::leaderboard::Timeframe;

fn default_leaderboard_limit() -> u64 {
    10
}

fn default_transaction_limit() -> u64 {
    20
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserStatsResponse {
    pub points: i32,
    pub level: i32,
    pub total_points_earned: i32,
    pub streak_days: i32,
    pub badges_count: usize,
    pub rank: u64,
    pub total_users: u64,
    pub recent_transactions: Vec<points_transaction::Model>,
    pub badges: Vec<EarnedBadge>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EarnedBadge {
    pub user_badge_id: Uuid,
    pub earned_at: chrono::NaiveDateTime,
    pub progress: f64,
    pub badge: Option<badge::Model>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardParams {
    #[serde(default = "default_leaderboard_limit")]
    pub limit: u64,
    #[serde(default)]
    pub timeframe: Timeframe,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: Uuid,
    pub username: String,
    pub points: i32,
    pub level: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub timeframe: Timeframe,
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TransactionParams {
    #[serde(default = "default_transaction_limit")]
    pub limit: u64,
}
