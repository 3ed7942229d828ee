//! Points ledger: per-user totals plus an append-only transaction log.
//!
//! Every mutation here is generic over [`ConnectionTrait`] so handlers can
//! run an award inside a database transaction together with the domain write
//! that triggered it. Either everything lands or nothing does.

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::entities::{badge, gamification_points, points_transaction};

use super::actions::{ActionType, level_for};
use super::badges::check_and_award_badges;

/// Everything a single award changed.
#[derive(Debug, Clone)]
pub struct AwardOutcome {
    pub transaction: points_transaction::Model,
    pub points: gamification_points::Model,
    pub new_badges: Vec<badge::Model>,
}

/// Fetches the user's points row, creating a fresh one (zero points,
/// level 1, no streak) on first contact.
pub async fn get_or_create_user_points<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    _now: NaiveDateTime,
) -> Result<gamification_points::Model, DbErr> {
    let existing = gamification_points::Entity::find()
        .filter(gamification_points::Column::UserId.eq(user_id))
        .one(conn)
        .await?;
    if let Some(points) = existing {
        return Ok(points);
    }

    gamification_points::ActiveModel {
        points_id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        points: Set(0),
        level: Set(1),
        total_points_earned: Set(0),
        streak_days: Set(0),
        last_activity: Set(None),
    }
    .insert(conn)
    .await
}

/// Awards the action's points: appends a transaction, bumps the running and
/// lifetime totals, recomputes the level, stamps `last_activity`, then
/// re-evaluates badges against the new state.
pub async fn award_points<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    action: ActionType,
    description: Option<String>,
    now: NaiveDateTime,
) -> Result<AwardOutcome, DbErr> {
    let delta = action.points();
    let current = get_or_create_user_points(conn, user_id, now).await?;

    let transaction = points_transaction::ActiveModel {
        transaction_id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        points: Set(delta),
        action_type: Set(action.tag().to_string()),
        description: Set(Some(
            description.unwrap_or_else(|| action.default_description()),
        )),
        created_at: Set(now),
    }
    .insert(conn)
    .await?;

    let new_points = current.points + delta;
    let new_total = current.total_points_earned + delta;
    let mut row: gamification_points::ActiveModel = current.into();
    row.points = Set(new_points);
    row.total_points_earned = Set(new_total);
    row.level = Set(level_for(new_total));
    row.last_activity = Set(Some(now));
    let points = row.update(conn).await?;

    let new_badges = check_and_award_badges(conn, user_id, now).await?;

    Ok(AwardOutcome {
        transaction,
        points,
        new_badges,
    })
}

/// Tag-based entry point for callers that carry the action as a string.
/// Unrecognized tags are a soft no-op, never an error, so optional or
/// extension action tags cannot fail the surrounding request.
///
/// The built-in routes all hold a typed [`ActionType`] and call
/// [`award_points`] directly; this wrapper exists for callers that receive
/// action tags from outside (scripts, future endpoints). The tag mapping
/// itself is covered by the round-trip tests on [`ActionType::from_tag`].
pub async fn award_points_for_tag<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    tag: &str,
    description: Option<String>,
    now: NaiveDateTime,
) -> Result<Option<AwardOutcome>, DbErr> {
    match ActionType::from_tag(tag) {
        Some(action) => award_points(conn, user_id, action, description, now)
            .await
            .map(Some),
        None => {
            tracing::debug!(%tag, "ignoring award for unknown action tag");
            Ok(None)
        }
    }
}
