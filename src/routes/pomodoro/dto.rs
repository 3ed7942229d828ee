use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::pomodoro_session;

fn default_duration() -> i32 {
    25
}

fn default_break() -> i32 {
    5
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StartPomodoroRequest {
    /// Attach the session to a study circle for group pomodoros.
    pub circle_id: Option<Uuid>,

    #[serde(default = "default_duration")]
    #[schema(example = 25)]
    pub duration_minutes: i32,

    #[serde(default = "default_break")]
    #[schema(example = 5)]
    pub break_minutes: i32,

    #[serde(default)]
    pub is_group_session: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CompletePomodoroResponse {
    pub message: String,
    pub session: pomodoro_session::Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PomodoroStats {
    pub total_sessions: usize,
    pub total_minutes: i64,
    pub total_hours: f64,
    pub completed_today: usize,
    pub average_per_day: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActivePomodoroResponse {
    pub active: bool,
    pub session: Option<pomodoro_session::Model>,
    pub elapsed_minutes: Option<f64>,
    pub remaining_minutes: Option<f64>,
}
