use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::entities::{
    badge, comment, community_post, course, event, notification, pomodoro_session,
    points_transaction,
    sea_orm_active_enums::{BadgeRarity, CircleRole, CircleStatus, NotificationType, RoleEnum},
    student_profile, study_circle, user, video_room, wellness_checkin,
};
use crate::gamification::leaderboard::Timeframe;
use crate::routes;
use crate::wellness::analysis::{MoodTrend, StressAnalysis, WeeklyStats};

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health::route::root,
        routes::health::route::health,
        routes::auth::route::register,
        routes::auth::route::token,
        routes::auth::route::me,
        routes::profile::route::upsert_profile,
        routes::profile::route::get_profile,
        routes::courses::route::list_courses,
        routes::courses::route::create_course,
        routes::circles::route::list_circles,
        routes::circles::route::match_to_circle,
        routes::circles::route::circle_members,
        routes::checkins::route::create_checkin,
        routes::checkins::route::checkin_history,
        routes::wellness::route::wellness_stats,
        routes::wellness::route::wellness_stress_analysis,
        routes::posts::route::list_posts,
        routes::posts::route::create_post,
        routes::posts::route::like_post,
        routes::posts::route::create_comment,
        routes::events::route::list_events,
        routes::events::route::create_event,
        routes::events::route::rsvp_event,
        routes::gamification::route::my_stats,
        routes::gamification::route::leaderboard,
        routes::gamification::route::all_badges,
        routes::gamification::route::my_badges,
        routes::gamification::route::my_transactions,
        routes::pomodoro::route::start_session,
        routes::pomodoro::route::complete_session,
        routes::pomodoro::route::session_stats,
        routes::pomodoro::route::active_session,
        routes::video_rooms::route::create_room,
        routes::video_rooms::route::get_room,
        routes::notifications::route::list_notifications,
        routes::notifications::route::mark_read,
        routes::notifications::route::mark_all_read,
        routes::dashboard::route::student_dashboard,
        routes::dashboard::route::admin_stats,
    ),
    components(schemas(
        user::Model,
        student_profile::Model,
        course::Model,
        study_circle::Model,
        wellness_checkin::Model,
        community_post::Model,
        comment::Model,
        event::Model,
        badge::Model,
        points_transaction::Model,
        pomodoro_session::Model,
        video_room::Model,
        notification::Model,
        RoleEnum,
        CircleStatus,
        CircleRole,
        BadgeRarity,
        NotificationType,
        MoodTrend,
        WeeklyStats,
        StressAnalysis,
        Timeframe,
        routes::auth::dto::RegisterRequest,
        routes::auth::dto::TokenRequest,
        routes::auth::dto::TokenResponse,
        routes::auth::dto::MeResponse,
        routes::profile::dto::ProfileRequest,
        routes::courses::dto::CreateCourseRequest,
        routes::circles::dto::MatchRequest,
        routes::circles::dto::CircleMemberDetail,
        routes::checkins::dto::CheckinRequest,
        routes::posts::dto::CreatePostRequest,
        routes::posts::dto::PostWithAuthor,
        routes::posts::dto::LikeResponse,
        routes::posts::dto::CommentRequest,
        routes::events::dto::CreateEventRequest,
        routes::events::dto::EventWithCreator,
        routes::events::dto::RsvpResponse,
        routes::gamification::dto::UserStatsResponse,
        routes::gamification::dto::EarnedBadge,
        routes::gamification::dto::LeaderboardEntry,
        routes::gamification::dto::LeaderboardResponse,
        routes::pomodoro::dto::StartPomodoroRequest,
        routes::pomodoro::dto::CompletePomodoroResponse,
        routes::pomodoro::dto::PomodoroStats,
        routes::pomodoro::dto::ActivePomodoroResponse,
        routes::video_rooms::dto::CreateVideoRoomRequest,
        routes::video_rooms::dto::VideoRoomResponse,
        routes::video_rooms::dto::VideoRoomLookupResponse,
        routes::notifications::dto::MessageResponse,
        routes::dashboard::dto::StudentDashboard,
        routes::dashboard::dto::AdminStats,
        routes::health::dto::RootResponse,
        routes::health::dto::HealthResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Authentication", description = "Registration and login"),
        (name = "Profile", description = "Student profiles"),
        (name = "Courses", description = "Course catalog"),
        (name = "Study Circles", description = "Study circle matching and membership"),
        (name = "Wellness", description = "Daily check-ins and mood analysis"),
        (name = "Community", description = "Posts, comments and likes"),
        (name = "Events", description = "Events and RSVPs"),
        (name = "Gamification", description = "Points, badges and leaderboard"),
        (name = "Pomodoro", description = "Focus session tracking"),
        (name = "Video Rooms", description = "Jitsi rooms for study circles"),
        (name = "Notifications", description = "In-app notifications"),
        (name = "Dashboard", description = "Aggregated views"),
    ),
    info(
        title = "Sprint Connect API",
        description = "Peer support platform for cohort students"
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
