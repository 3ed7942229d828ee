//! The fixed set of point-earning actions and their values.

use serde::{Deserialize, Serialize};

/// Transaction tag used for streak bonus awards (not a regular action).
pub const STREAK_BONUS_TAG: &str = "wellness_streak_bonus";

/// Bonus points per day of streak.
pub const STREAK_BONUS_PER_DAY: i32 = 5;

/// Points needed per level; `level = total_earned / 100 + 1`.
pub const POINTS_PER_LEVEL: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    DailyCheckin,
    CreatePost,
    Comment,
    LikePost,
    JoinCircle,
    EventRsvp,
    EventAttend,
    PomodoroComplete,
    StudySessionHour,
    HelpPeer,
}

impl ActionType {
    /// Static point value of the action.
    pub fn points(self) -> i32 {
        match self {
            ActionType::DailyCheckin => 10,
            ActionType::CreatePost => 15,
            ActionType::Comment => 5,
            ActionType::LikePost => 1,
            ActionType::JoinCircle => 20,
            ActionType::EventRsvp => 10,
            ActionType::EventAttend => 15,
            ActionType::PomodoroComplete => 5,
            ActionType::StudySessionHour => 10,
            ActionType::HelpPeer => 25,
        }
    }

    /// Tag stored in the `points_transactions.action_type` column.
    pub fn tag(self) -> &'static str {
        match self {
            ActionType::DailyCheckin => "daily_checkin",
            ActionType::CreatePost => "create_post",
            ActionType::Comment => "comment",
            ActionType::LikePost => "like_post",
            ActionType::JoinCircle => "join_circle",
            ActionType::EventRsvp => "event_rsvp",
            ActionType::EventAttend => "event_attend",
            ActionType::PomodoroComplete => "pomodoro_complete",
            ActionType::StudySessionHour => "study_session_hour",
            ActionType::HelpPeer => "help_peer",
        }
    }

    /// Inverse of [`ActionType::tag`]. Unrecognized tags yield `None`;
    /// callers treat that as a soft no-op, never an error, so optional
    /// extension actions cannot break a request.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "daily_checkin" => Some(ActionType::DailyCheckin),
            "create_post" => Some(ActionType::CreatePost),
            "comment" => Some(ActionType::Comment),
            "like_post" => Some(ActionType::LikePost),
            "join_circle" => Some(ActionType::JoinCircle),
            "event_rsvp" => Some(ActionType::EventRsvp),
            "event_attend" => Some(ActionType::EventAttend),
            "pomodoro_complete" => Some(ActionType::PomodoroComplete),
            "study_session_hour" => Some(ActionType::StudySessionHour),
            "help_peer" => Some(ActionType::HelpPeer),
            _ => None,
        }
    }

    /// Default human description, e.g. "Daily Checkin".
    pub fn default_description(self) -> String {
        let mut out = String::new();
        for word in self.tag().split('_') {
            if !out.is_empty() {
                out.push(' ');
            }
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
        out
    }
}

/// `level = total_earned / 100 + 1`, recomputed on every award.
pub fn level_for(total_points_earned: i32) -> i32 {
    total_points_earned / POINTS_PER_LEVEL + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_values_match_config() {
        assert_eq!(ActionType::DailyCheckin.points(), 10);
        assert_eq!(ActionType::CreatePost.points(), 15);
        assert_eq!(ActionType::Comment.points(), 5);
        assert_eq!(ActionType::LikePost.points(), 1);
        assert_eq!(ActionType::JoinCircle.points(), 20);
        assert_eq!(ActionType::EventRsvp.points(), 10);
        assert_eq!(ActionType::EventAttend.points(), 15);
        assert_eq!(ActionType::PomodoroComplete.points(), 5);
        assert_eq!(ActionType::StudySessionHour.points(), 10);
        assert_eq!(ActionType::HelpPeer.points(), 25);
    }

    #[test]
    fn tag_round_trip() {
        for action in [
            ActionType::DailyCheckin,
            ActionType::CreatePost,
            ActionType::Comment,
            ActionType::LikePost,
            ActionType::JoinCircle,
            ActionType::EventRsvp,
            ActionType::EventAttend,
            ActionType::PomodoroComplete,
            ActionType::StudySessionHour,
            ActionType::HelpPeer,
        ] {
            assert_eq!(ActionType::from_tag(action.tag()), Some(action));
        }
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(ActionType::from_tag("tweet"), None);
        assert_eq!(ActionType::from_tag(""), None);
        assert_eq!(ActionType::from_tag("DAILY_CHECKIN"), None);
    }

    #[test]
    fn level_formula() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(99), 1);
        assert_eq!(level_for(100), 2);
        assert_eq!(level_for(250), 3);
        assert_eq!(level_for(1000), 11);
    }

    #[test]
    fn default_descriptions() {
        assert_eq!(ActionType::DailyCheckin.default_description(), "Daily Checkin");
        assert_eq!(ActionType::HelpPeer.default_description(), "Help Peer");
    }
}
