//! Leaderboard and per-user stat aggregation.

use chrono::{Duration, NaiveDateTime};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{badge, gamification_points, points_transaction, user, user_badge};

use super::ledger::get_or_create_user_points;

/// Leaderboard window. Week and month filter on `last_activity` recency,
/// so the board shows recently active users ranked by their running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    #[default]
    AllTime,
    Week,
    Month,
}

impl Timeframe {
    fn cutoff(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            Timeframe::AllTime => None,
            Timeframe::Week => Some(now - Duration::days(7)),
            Timeframe::Month => Some(now - Duration::days(30)),
        }
    }
}

/// Top users by running points, highest first, with their account rows.
pub async fn get_leaderboard<C: ConnectionTrait>(
    conn: &C,
    limit: u64,
    timeframe: Timeframe,
    now: NaiveDateTime,
) -> Result<Vec<(gamification_points::Model, Option<user::Model>)>, DbErr> {
    let mut query = gamification_points::Entity::find().find_also_related(user::Entity);

    if let Some(cutoff) = timeframe.cutoff(now) {
        query = query.filter(gamification_points::Column::LastActivity.gte(cutoff));
    }

    query
        .order_by_desc(gamification_points::Column::Points)
        .limit(limit)
        .all(conn)
        .await
}

/// Everything the stats endpoint reports for one user.
#[derive(Debug, Clone)]
pub struct UserStats {
    pub points: gamification_points::Model,
    pub badges: Vec<(user_badge::Model, Option<badge::Model>)>,
    pub recent_transactions: Vec<points_transaction::Model>,
    /// 1-based; ties share a rank (`count of strictly higher scores + 1`).
    pub rank: u64,
    pub total_users: u64,
}

pub async fn get_user_stats<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    now: NaiveDateTime,
) -> Result<UserStats, DbErr> {
    let points = get_or_create_user_points(conn, user_id, now).await?;

    let badges = user_badge::Entity::find()
        .find_also_related(badge::Entity)
        .filter(user_badge::Column::UserId.eq(user_id))
        .all(conn)
        .await?;

    let recent_transactions = points_transaction::Entity::find()
        .filter(points_transaction::Column::UserId.eq(user_id))
        .order_by_desc(points_transaction::Column::CreatedAt)
        .limit(10)
        .all(conn)
        .await?;

    let total_users = gamification_points::Entity::find().count(conn).await?;
    let higher_ranked = gamification_points::Entity::find()
        .filter(gamification_points::Column::Points.gt(points.points))
        .count(conn)
        .await?;

    Ok(UserStats {
        points,
        badges,
        recent_transactions,
        rank: higher_ranked + 1,
        total_users,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_time_has_no_cutoff() {
        let now = chrono::NaiveDate::from_ymd_opt(2024, 9, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(Timeframe::AllTime.cutoff(now), None);
        assert_eq!(Timeframe::Week.cutoff(now), Some(now - Duration::days(7)));
        assert_eq!(Timeframe::Month.cutoff(now), Some(now - Duration::days(30)));
    }

    #[test]
    fn timeframe_deserializes_from_snake_case() {
        assert_eq!(
            serde_json::from_str::<Timeframe>("\"all_time\"").unwrap(),
            Timeframe::AllTime
        );
        assert_eq!(
            serde_json::from_str::<Timeframe>("\"week\"").unwrap(),
            Timeframe::Week
        );
        assert!(serde_json::from_str::<Timeframe>("\"fortnight\"").is_err());
    }
}
