use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

fn default_days() -> i64 {
    7
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckinRequest {
    #[schema(example = "🙂")]
    pub mood_emoji: String,

    /// 1 (very low) to 5 (very good).
    #[schema(example = 4, minimum = 1, maximum = 5)]
    pub mood_score: i32,

    pub note: Option<String>,
    pub sprint_week: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CheckinHistoryParams {
    /// How far back to look, in days.
    #[serde(default = "default_days")]
    pub days: i64,
}
