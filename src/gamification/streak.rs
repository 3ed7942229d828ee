//! Daily check-in streak tracking.
//!
//! The date comparison is pure and takes the current day explicitly, so the
//! transition rules are testable without a clock or a database.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};

use crate::entities::{gamification_points, points_transaction};

use super::actions::{STREAK_BONUS_PER_DAY, STREAK_BONUS_TAG, level_for};
use super::ledger::get_or_create_user_points;

/// What a new check-in on `today` does to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// First activity ever: streak becomes 1.
    Start,
    /// Last activity was yesterday: streak grows by one and earns a bonus.
    Extend,
    /// A day or more was missed: streak restarts at 1.
    Reset,
    /// Already active today: nothing changes.
    SameDay,
}

pub fn streak_transition(last_activity: Option<NaiveDate>, today: NaiveDate) -> StreakTransition {
    match last_activity {
        None => StreakTransition::Start,
        Some(last) => match (today - last).num_days() {
            0 => StreakTransition::SameDay,
            1 => StreakTransition::Extend,
            gap if gap > 1 => StreakTransition::Reset,
            // last_activity in the future; treat as already counted today
            _ => StreakTransition::SameDay,
        },
    }
}

/// New streak length and bonus points for applying `transition` to the
/// current streak. Only Extend pays a bonus: 5 points per day of the grown
/// streak, so extending from 1 to 2 pays 10.
pub fn apply_transition(streak_days: i32, transition: StreakTransition) -> (i32, i32) {
    match transition {
        StreakTransition::Start | StreakTransition::Reset => (1, 0),
        StreakTransition::Extend => {
            let streak = streak_days + 1;
            (streak, STREAK_BONUS_PER_DAY * streak)
        }
        StreakTransition::SameDay => (streak_days, 0),
    }
}

/// Applies the streak transition for a check-in happening at `now` and pays
/// the streak bonus (5 points per streak day) when the streak extends.
///
/// Must run before the check-in's own points are awarded: awarding stamps
/// `last_activity` with today, which would make yesterday's date unobservable.
pub async fn update_streak<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    now: NaiveDateTime,
) -> Result<gamification_points::Model, DbErr> {
    let current = get_or_create_user_points(conn, user_id, now).await?;

    let today = now.date();
    let transition = streak_transition(current.last_activity.map(|t| t.date()), today);
    let (new_streak, bonus) = apply_transition(current.streak_days, transition);

    if bonus > 0 {
        points_transaction::ActiveModel {
            transaction_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            points: Set(bonus),
            action_type: Set(STREAK_BONUS_TAG.to_string()),
            description: Set(Some(format!("{new_streak} day streak bonus!"))),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;
    }

    let new_points = current.points + bonus;
    let new_total = current.total_points_earned + bonus;
    let mut row: gamification_points::ActiveModel = current.into();
    row.streak_days = Set(new_streak);
    row.points = Set(new_points);
    row.total_points_earned = Set(new_total);
    row.level = Set(level_for(new_total));
    row.last_activity = Set(Some(now));
    row.update(conn).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn no_history_starts_a_streak() {
        assert_eq!(
            streak_transition(None, date(2024, 9, 10)),
            StreakTransition::Start
        );
    }

    #[test]
    fn consecutive_day_extends() {
        assert_eq!(
            streak_transition(Some(date(2024, 9, 9)), date(2024, 9, 10)),
            StreakTransition::Extend
        );
    }

    #[test]
    fn extend_across_month_boundary() {
        assert_eq!(
            streak_transition(Some(date(2024, 8, 31)), date(2024, 9, 1)),
            StreakTransition::Extend
        );
    }

    #[test]
    fn gap_resets() {
        assert_eq!(
            streak_transition(Some(date(2024, 9, 7)), date(2024, 9, 10)),
            StreakTransition::Reset
        );
        assert_eq!(
            streak_transition(Some(date(2024, 1, 1)), date(2024, 9, 10)),
            StreakTransition::Reset
        );
    }

    #[test]
    fn second_checkin_same_day_is_a_no_op() {
        assert_eq!(
            streak_transition(Some(date(2024, 9, 10)), date(2024, 9, 10)),
            StreakTransition::SameDay
        );
    }

    #[test]
    fn future_last_activity_is_treated_as_same_day() {
        assert_eq!(
            streak_transition(Some(date(2024, 9, 11)), date(2024, 9, 10)),
            StreakTransition::SameDay
        );
    }

    #[test]
    fn extend_pays_five_per_day_of_the_new_streak() {
        assert_eq!(apply_transition(1, StreakTransition::Extend), (2, 10));
        assert_eq!(apply_transition(6, StreakTransition::Extend), (7, 35));
    }

    #[test]
    fn start_and_reset_pay_no_bonus() {
        assert_eq!(apply_transition(0, StreakTransition::Start), (1, 0));
        assert_eq!(apply_transition(9, StreakTransition::Reset), (1, 0));
    }

    #[test]
    fn same_day_keeps_the_streak_and_pays_nothing() {
        assert_eq!(apply_transition(4, StreakTransition::SameDay), (4, 0));
    }
}
