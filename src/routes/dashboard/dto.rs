use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::{community_post, event, student_profile, study_circle, user, wellness_checkin};

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentDashboard {
    pub user: user::Model,
    pub profile: Option<student_profile::Model>,
    pub active_circles: Vec<study_circle::Model>,
    pub recent_checkins: Vec<wellness_checkin::Model>,
    pub upcoming_events: Vec<event::Model>,
    pub community_posts: Vec<community_post::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStats {
    pub total_users: u64,
    pub active_study_circles: u64,
    pub wellness_checkins_today: u64,
    pub community_posts_this_week: u64,
    pub average_mood_score: f64,
    pub upcoming_events: u64,
}
