//! Mood statistics derived from wellness check-ins.
//!
//! Pure functions over already-fetched check-in rows; the caller passes the
//! current date so the math is deterministic under test.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::wellness_checkin;

/// How many check-ins the stress analysis needs before it says anything.
pub const STRESS_MIN_CHECKINS: usize = 7;

/// Mood score at or below this counts as a low mood day.
pub const LOW_MOOD_THRESHOLD: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
    /// Fewer than 4 check-ins this week; no trend worth reporting.
    Neutral,
    /// Fewer than [`STRESS_MIN_CHECKINS`] check-ins in the window.
    InsufficientData,
}

/// Rolling 7-day summary for the wellness dashboard card.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct WeeklyStats {
    pub average_mood: f64,
    pub trend: MoodTrend,
    /// Consecutive days ending today with at least one check-in, capped at 7.
    pub streak: i32,
    pub total_checkins: usize,
}

/// `checkins` are the user's check-ins from the last 7 days, oldest first.
pub fn weekly_stats(checkins: &[wellness_checkin::Model], today: NaiveDate) -> WeeklyStats {
    if checkins.is_empty() {
        return WeeklyStats {
            average_mood: 0.0,
            trend: MoodTrend::Neutral,
            streak: 0,
            total_checkins: 0,
        };
    }

    let scores: Vec<f64> = checkins.iter().map(|c| f64::from(c.mood_score)).collect();
    let average_mood = scores.iter().sum::<f64>() / scores.len() as f64;

    // Compare the last 3 check-ins against the older ones.
    let trend = if scores.len() >= 4 {
        let split = scores.len() - 3;
        let recent = scores[split..].iter().sum::<f64>() / 3.0;
        let older = scores[..split].iter().sum::<f64>() / split as f64;
        if recent > older {
            MoodTrend::Improving
        } else if recent < older {
            MoodTrend::Declining
        } else {
            MoodTrend::Stable
        }
    } else {
        MoodTrend::Neutral
    };

    let mut streak = 0;
    for offset in 0..7 {
        let day = today - chrono::Duration::days(offset);
        if checkins.iter().any(|c| c.created_at.date() == day) {
            streak += 1;
        } else {
            break;
        }
    }

    WeeklyStats {
        average_mood,
        trend,
        streak,
        total_checkins: checkins.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StressAnalysis {
    pub average_mood: f64,
    pub recent_average: f64,
    pub trend: MoodTrend,
    pub low_mood_days_count: usize,
    pub alert: bool,
    pub alert_message: String,
    pub total_checkins: usize,
    /// True only for the strong alert, which the caller also persists as an
    /// alert notification pointing at peer support.
    #[serde(skip)]
    pub persist_alert: bool,
}

/// `checkins` are the user's check-ins from the last 30 days, oldest first.
pub fn stress_analysis(checkins: &[wellness_checkin::Model]) -> StressAnalysis {
    if checkins.len() < STRESS_MIN_CHECKINS {
        return StressAnalysis {
            average_mood: 0.0,
            recent_average: 0.0,
            trend: MoodTrend::InsufficientData,
            low_mood_days_count: 0,
            alert: false,
            alert_message: "Need at least 7 check-ins for analysis".to_string(),
            total_checkins: checkins.len(),
            persist_alert: false,
        };
    }

    let scores: Vec<f64> = checkins.iter().map(|c| f64::from(c.mood_score)).collect();
    let average_mood = scores.iter().sum::<f64>() / scores.len() as f64;

    let recent_average = scores[scores.len() - 7..].iter().sum::<f64>() / 7.0;
    let older_average = if scores.len() >= 14 {
        scores[scores.len() - 14..scores.len() - 7].iter().sum::<f64>() / 7.0
    } else {
        average_mood
    };

    let trend = if recent_average < older_average - 0.5 {
        MoodTrend::Declining
    } else if recent_average > older_average + 0.5 {
        MoodTrend::Improving
    } else {
        MoodTrend::Stable
    };

    let low_mood_days_count = checkins[checkins.len() - 7..]
        .iter()
        .filter(|c| c.mood_score <= LOW_MOOD_THRESHOLD)
        .count();

    let (alert, alert_message, persist_alert) =
        if trend == MoodTrend::Declining && low_mood_days_count >= 3 {
            (
                true,
                "We've noticed your mood has been declining. Consider reaching out to a peer supporter."
                    .to_string(),
                true,
            )
        } else if low_mood_days_count >= 4 {
            (
                true,
                "You've had several low mood days. Would you like to connect with support?"
                    .to_string(),
                false,
            )
        } else {
            (false, String::new(), false)
        };

    StressAnalysis {
        average_mood,
        recent_average,
        trend,
        low_mood_days_count,
        alert,
        alert_message,
        total_checkins: checkins.len(),
        persist_alert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn checkin(days_ago: i64, mood_score: i32) -> wellness_checkin::Model {
        let created_at = base_date()
            .and_hms_opt(9, 30, 0)
            .unwrap()
            - chrono::Duration::days(days_ago);
        wellness_checkin::Model {
            checkin_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            mood_emoji: "🙂".to_string(),
            mood_score,
            note: None,
            sprint_week: None,
            created_at,
        }
    }

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 10).unwrap()
    }

    fn series(days_ago_and_scores: &[(i64, i32)]) -> Vec<wellness_checkin::Model> {
        let mut out: Vec<_> = days_ago_and_scores
            .iter()
            .map(|&(days_ago, score)| checkin(days_ago, score))
            .collect();
        out.sort_by_key(|c| c.created_at);
        out
    }

    #[test]
    fn weekly_stats_empty_is_all_zero() {
        let stats = weekly_stats(&[], base_date());
        assert_eq!(stats.average_mood, 0.0);
        assert_eq!(stats.trend, MoodTrend::Neutral);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.total_checkins, 0);
    }

    #[test]
    fn weekly_trend_needs_four_samples() {
        let stats = weekly_stats(&series(&[(2, 1), (1, 3), (0, 5)]), base_date());
        assert_eq!(stats.trend, MoodTrend::Neutral);
        assert_eq!(stats.average_mood, 3.0);
    }

    #[test]
    fn weekly_trend_improving() {
        // older: [2], recent: [4, 4, 5]
        let stats = weekly_stats(&series(&[(3, 2), (2, 4), (1, 4), (0, 5)]), base_date());
        assert_eq!(stats.trend, MoodTrend::Improving);
    }

    #[test]
    fn weekly_trend_declining() {
        let stats = weekly_stats(&series(&[(3, 5), (2, 2), (1, 2), (0, 1)]), base_date());
        assert_eq!(stats.trend, MoodTrend::Declining);
    }

    #[test]
    fn weekly_trend_stable_when_means_match() {
        let stats = weekly_stats(&series(&[(3, 3), (2, 3), (1, 3), (0, 3)]), base_date());
        assert_eq!(stats.trend, MoodTrend::Stable);
    }

    #[test]
    fn weekly_streak_counts_back_from_today() {
        let stats = weekly_stats(&series(&[(2, 3), (1, 3), (0, 3)]), base_date());
        assert_eq!(stats.streak, 3);
    }

    #[test]
    fn weekly_streak_breaks_on_missing_day() {
        // no check-in yesterday
        let stats = weekly_stats(&series(&[(3, 3), (2, 3), (0, 3)]), base_date());
        assert_eq!(stats.streak, 1);
    }

    #[test]
    fn weekly_streak_zero_without_todays_checkin() {
        let stats = weekly_stats(&series(&[(2, 3), (1, 3)]), base_date());
        assert_eq!(stats.streak, 0);
    }

    #[test]
    fn stress_needs_seven_checkins() {
        let analysis = stress_analysis(&series(&[(5, 1), (4, 1), (3, 1), (2, 1), (1, 1), (0, 1)]));
        assert_eq!(analysis.trend, MoodTrend::InsufficientData);
        assert!(!analysis.alert);
        assert_eq!(analysis.total_checkins, 6);
    }

    #[test]
    fn stress_stable_without_older_window() {
        // Exactly 7 samples: older average falls back to the overall mean,
        // and recent equals overall, so the trend is stable.
        let analysis = stress_analysis(&series(&[
            (6, 4),
            (5, 4),
            (4, 4),
            (3, 4),
            (2, 4),
            (1, 4),
            (0, 4),
        ]));
        assert_eq!(analysis.trend, MoodTrend::Stable);
        assert_eq!(analysis.recent_average, 4.0);
        assert!(!analysis.alert);
    }

    #[test]
    fn stress_strong_alert_persists_notification() {
        // Older week high, recent week low with >= 3 low days.
        let analysis = stress_analysis(&series(&[
            (13, 5),
            (12, 5),
            (11, 5),
            (10, 5),
            (9, 5),
            (8, 5),
            (7, 5),
            (6, 2),
            (5, 2),
            (4, 2),
            (3, 4),
            (2, 4),
            (1, 4),
            (0, 4),
        ]));
        assert_eq!(analysis.trend, MoodTrend::Declining);
        assert_eq!(analysis.low_mood_days_count, 3);
        assert!(analysis.alert);
        assert!(analysis.persist_alert);
    }

    #[test]
    fn stress_soft_alert_on_many_low_days_without_decline() {
        // Low throughout: trend stable, but 7 low days in the last week.
        let analysis = stress_analysis(&series(&[
            (13, 2),
            (12, 2),
            (11, 2),
            (10, 2),
            (9, 2),
            (8, 2),
            (7, 2),
            (6, 2),
            (5, 2),
            (4, 2),
            (3, 2),
            (2, 2),
            (1, 2),
            (0, 2),
        ]));
        assert_eq!(analysis.trend, MoodTrend::Stable);
        assert_eq!(analysis.low_mood_days_count, 7);
        assert!(analysis.alert);
        assert!(!analysis.persist_alert);
    }

    #[test]
    fn stress_no_alert_when_mood_is_fine() {
        let analysis = stress_analysis(&series(&[
            (6, 4),
            (5, 5),
            (4, 4),
            (3, 5),
            (2, 4),
            (1, 5),
            (0, 4),
        ]));
        assert!(!analysis.alert);
        assert!(analysis.alert_message.is_empty());
    }
}
