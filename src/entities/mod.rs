pub mod sea_orm_active_enums;

pub mod badge;
pub mod circle_member;
pub mod comment;
pub mod community_post;
pub mod course;
pub mod event;
pub mod event_attendee;
pub mod gamification_points;
pub mod notification;
pub mod points_transaction;
pub mod pomodoro_session;
pub mod student_profile;
pub mod study_circle;
pub mod study_session;
pub mod user;
pub mod user_badge;
pub mod video_room;
pub mod wellness_checkin;
