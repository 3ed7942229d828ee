pub mod auth;
pub mod checkins;
pub mod circles;
pub mod courses;
pub mod dashboard;
pub mod events;
pub mod gamification;
pub mod health;
pub mod notifications;
pub mod pomodoro;
pub mod posts;
pub mod profile;
pub mod video_rooms;
pub mod wellness;
