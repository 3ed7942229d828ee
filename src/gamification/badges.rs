//! Badge catalog, criteria evaluation and awarding.
//!
//! Criteria are stored as a JSON object of named thresholds, e.g.
//! `{"circles": 3}` or `{"checkins": 1, "level": 2}`. Multiple keys form a
//! conjunction. The set of recognized keys is closed: an object with an
//! unknown key fails to parse and the badge is never awarded (fail closed),
//! and an empty object is never satisfiable.

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect, Set};
use serde_json::{Value, json};

use crate::entities::sea_orm_active_enums::{BadgeRarity, NotificationType};
use crate::entities::{
    badge, circle_member, community_post, notification, pomodoro_session, study_session,
    user_badge, wellness_checkin,
};

use super::ledger::get_or_create_user_points;

/// One recognized badge requirement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BadgeCriterion {
    /// Total wellness check-ins.
    Checkins(i64),
    /// Current check-in streak in days.
    CheckinStreak(i32),
    /// Community posts authored.
    Posts(i64),
    /// Study circle memberships.
    Circles(i64),
    /// Completed pomodoro sessions.
    Pomodoros(i64),
    /// Total logged study hours.
    StudyHours(f64),
    /// Gamification level reached.
    Level(i32),
}

/// A parsed conjunction of criteria. Empty means "never satisfiable".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadgeCriteria(pub Vec<BadgeCriterion>);

#[derive(Debug, thiserror::Error)]
pub enum CriteriaError {
    #[error("criteria must be a JSON object")]
    NotAnObject,
    #[error("unknown criteria key: {0}")]
    UnknownKey(String),
    #[error("criteria key {0} has a non-numeric value")]
    BadValue(String),
}

impl BadgeCriteria {
    pub fn from_value(value: &Value) -> Result<Self, CriteriaError> {
        let map = value.as_object().ok_or(CriteriaError::NotAnObject)?;
        let mut out = Vec::with_capacity(map.len());
        for (key, raw) in map {
            let as_i64 = |raw: &Value| raw.as_i64().ok_or_else(|| CriteriaError::BadValue(key.clone()));
            let criterion = match key.as_str() {
                "checkins" => BadgeCriterion::Checkins(as_i64(raw)?),
                "checkin_streak" => BadgeCriterion::CheckinStreak(as_i64(raw)? as i32),
                "posts" => BadgeCriterion::Posts(as_i64(raw)?),
                "circles" => BadgeCriterion::Circles(as_i64(raw)?),
                "pomodoros" => BadgeCriterion::Pomodoros(as_i64(raw)?),
                "study_hours" => BadgeCriterion::StudyHours(
                    raw.as_f64().ok_or_else(|| CriteriaError::BadValue(key.clone()))?,
                ),
                "level" => BadgeCriterion::Level(as_i64(raw)? as i32),
                other => return Err(CriteriaError::UnknownKey(other.to_string())),
            };
            out.push(criterion);
        }
        Ok(BadgeCriteria(out))
    }

    /// All criteria must hold; an empty conjunction holds for no one.
    pub fn satisfied_by(&self, activity: &UserActivity) -> bool {
        if self.0.is_empty() {
            return false;
        }
        self.0.iter().all(|criterion| match *criterion {
            BadgeCriterion::Checkins(n) => activity.checkins >= n,
            BadgeCriterion::CheckinStreak(n) => activity.streak_days >= n,
            BadgeCriterion::Posts(n) => activity.posts >= n,
            BadgeCriterion::Circles(n) => activity.circles >= n,
            BadgeCriterion::Pomodoros(n) => activity.completed_pomodoros >= n,
            BadgeCriterion::StudyHours(h) => activity.study_hours >= h,
            BadgeCriterion::Level(n) => activity.level >= n,
        })
    }
}

/// Snapshot of everything badge criteria can look at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserActivity {
    pub checkins: i64,
    pub streak_days: i32,
    pub posts: i64,
    pub circles: i64,
    pub completed_pomodoros: i64,
    pub study_hours: f64,
    pub level: i32,
}

pub async fn load_user_activity<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    now: chrono::NaiveDateTime,
) -> Result<UserActivity, DbErr> {
    let points = get_or_create_user_points(conn, user_id, now).await?;

    let checkins = wellness_checkin::Entity::find()
        .filter(wellness_checkin::Column::UserId.eq(user_id))
        .count(conn)
        .await? as i64;
    let posts = community_post::Entity::find()
        .filter(community_post::Column::AuthorId.eq(user_id))
        .count(conn)
        .await? as i64;
    let circles = circle_member::Entity::find()
        .filter(circle_member::Column::UserId.eq(user_id))
        .count(conn)
        .await? as i64;
    let completed_pomodoros = pomodoro_session::Entity::find()
        .filter(pomodoro_session::Column::UserId.eq(user_id))
        .filter(pomodoro_session::Column::Completed.eq(true))
        .count(conn)
        .await? as i64;

    let total_minutes: Option<i64> = study_session::Entity::find()
        .select_only()
        .column_as(study_session::Column::DurationMinutes.sum(), "total")
        .filter(study_session::Column::UserId.eq(user_id))
        .filter(study_session::Column::DurationMinutes.is_not_null())
        .into_tuple()
        .one(conn)
        .await?
        .flatten();

    Ok(UserActivity {
        checkins,
        streak_days: points.streak_days,
        posts,
        circles,
        completed_pomodoros,
        study_hours: total_minutes.unwrap_or(0) as f64 / 60.0,
        level: points.level,
    })
}

/// Grants every not-yet-earned badge whose criteria the user now meets.
/// Each grant inserts a `user_badges` row with full progress and an
/// achievement notification. Returns the newly earned badges.
pub async fn check_and_award_badges<C: ConnectionTrait>(
    conn: &C,
    user_id: Uuid,
    now: chrono::NaiveDateTime,
) -> Result<Vec<badge::Model>, DbErr> {
    let activity = load_user_activity(conn, user_id, now).await?;

    let earned: Vec<Uuid> = user_badge::Entity::find()
        .select_only()
        .column(user_badge::Column::BadgeId)
        .filter(user_badge::Column::UserId.eq(user_id))
        .into_tuple()
        .all(conn)
        .await?;

    let catalog = badge::Entity::find().all(conn).await?;

    let mut newly_awarded = Vec::new();
    for badge in catalog {
        if earned.contains(&badge.badge_id) {
            continue;
        }

        let criteria = match BadgeCriteria::from_value(&badge.criteria) {
            Ok(criteria) => criteria,
            Err(err) => {
                tracing::warn!(badge = %badge.name, %err, "skipping badge with invalid criteria");
                continue;
            }
        };
        if !criteria.satisfied_by(&activity) {
            continue;
        }

        user_badge::ActiveModel {
            user_badge_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            badge_id: Set(badge.badge_id),
            earned_at: Set(now),
            progress: Set(1.0),
        }
        .insert(conn)
        .await?;

        let icon = badge.icon.as_deref().unwrap_or("");
        notification::ActiveModel {
            notification_id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            title: Set(format!("New Badge Earned: {icon} {}!", badge.name)),
            message: Set(badge.description.clone().unwrap_or_default()),
            notification_type: Set(NotificationType::Achievement),
            is_read: Set(false),
            action_url: Set(None),
            created_at: Set(now),
        }
        .insert(conn)
        .await?;

        newly_awarded.push(badge);
    }

    Ok(newly_awarded)
}

pub struct BadgeSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub points_required: i32,
    pub criteria: Value,
    pub rarity: BadgeRarity,
}

/// The default badge catalog, seeded at startup.
pub fn default_badges() -> Vec<BadgeSeed> {
    vec![
        BadgeSeed {
            name: "First Steps",
            description: "Complete your first wellness check-in",
            icon: "👣",
            category: "wellness",
            points_required: 10,
            criteria: json!({"checkins": 1}),
            rarity: BadgeRarity::Common,
        },
        BadgeSeed {
            name: "Wellness Warrior",
            description: "Complete 7 consecutive wellness check-ins",
            icon: "💪",
            category: "wellness",
            points_required: 70,
            criteria: json!({"checkin_streak": 7}),
            rarity: BadgeRarity::Rare,
        },
        BadgeSeed {
            name: "Community Builder",
            description: "Create 5 community posts",
            icon: "🏗️",
            category: "participation",
            points_required: 75,
            criteria: json!({"posts": 5}),
            rarity: BadgeRarity::Rare,
        },
        BadgeSeed {
            name: "Study Buddy",
            description: "Join your first study circle",
            icon: "🎓",
            category: "achievement",
            points_required: 20,
            criteria: json!({"circles": 1}),
            rarity: BadgeRarity::Common,
        },
        BadgeSeed {
            name: "Social Butterfly",
            description: "Join 3 study circles",
            icon: "🦋",
            category: "achievement",
            points_required: 60,
            criteria: json!({"circles": 3}),
            rarity: BadgeRarity::Rare,
        },
        BadgeSeed {
            name: "Time Master",
            description: "Complete 10 Pomodoro sessions",
            icon: "⏰",
            category: "productivity",
            points_required: 50,
            criteria: json!({"pomodoros": 10}),
            rarity: BadgeRarity::Rare,
        },
        BadgeSeed {
            name: "Marathon Studier",
            description: "Study for 20 hours total",
            icon: "📚",
            category: "productivity",
            points_required: 200,
            criteria: json!({"study_hours": 20}),
            rarity: BadgeRarity::Epic,
        },
        BadgeSeed {
            name: "Sprint Champion",
            description: "Reach level 10",
            icon: "🏆",
            category: "achievement",
            points_required: 1000,
            criteria: json!({"level": 10}),
            rarity: BadgeRarity::Legendary,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity() -> UserActivity {
        UserActivity {
            checkins: 10,
            streak_days: 7,
            posts: 5,
            circles: 2,
            completed_pomodoros: 12,
            study_hours: 21.5,
            level: 3,
        }
    }

    #[test]
    fn parses_every_known_key() {
        let value = json!({
            "checkins": 1,
            "checkin_streak": 7,
            "posts": 5,
            "circles": 3,
            "pomodoros": 10,
            "study_hours": 20,
            "level": 10
        });
        let criteria = BadgeCriteria::from_value(&value).unwrap();
        assert_eq!(criteria.0.len(), 7);
    }

    #[test]
    fn unknown_key_fails_closed() {
        let value = json!({"checkins": 1, "peer_helps": 10});
        assert!(matches!(
            BadgeCriteria::from_value(&value),
            Err(CriteriaError::UnknownKey(key)) if key == "peer_helps"
        ));
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(
            BadgeCriteria::from_value(&json!([1, 2])),
            Err(CriteriaError::NotAnObject)
        ));
        assert!(matches!(
            BadgeCriteria::from_value(&json!(null)),
            Err(CriteriaError::NotAnObject)
        ));
    }

    #[test]
    fn empty_object_is_never_satisfied() {
        let criteria = BadgeCriteria::from_value(&json!({})).unwrap();
        assert!(!criteria.satisfied_by(&activity()));
    }

    #[test]
    fn conjunction_requires_all_thresholds() {
        let both = BadgeCriteria::from_value(&json!({"checkins": 1, "level": 2})).unwrap();
        assert!(both.satisfied_by(&activity()));

        let too_high = BadgeCriteria::from_value(&json!({"checkins": 1, "level": 4})).unwrap();
        assert!(!too_high.satisfied_by(&activity()));
    }

    #[test]
    fn thresholds_are_inclusive() {
        let streak = BadgeCriteria::from_value(&json!({"checkin_streak": 7})).unwrap();
        assert!(streak.satisfied_by(&activity()));

        let hours = BadgeCriteria::from_value(&json!({"study_hours": 21.5})).unwrap();
        assert!(hours.satisfied_by(&activity()));
    }

    #[test]
    fn default_catalog_parses_and_stays_closed() {
        for seed in default_badges() {
            let criteria = BadgeCriteria::from_value(&seed.criteria)
                .unwrap_or_else(|err| panic!("{}: {err}", seed.name));
            assert!(!criteria.0.is_empty(), "{} has empty criteria", seed.name);
        }
    }
}
