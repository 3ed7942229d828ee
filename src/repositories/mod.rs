pub mod checkin_repository;
pub mod circle_repository;
pub mod course_repository;
pub mod event_repository;
pub mod notification_repository;
pub mod pomodoro_repository;
pub mod post_repository;
pub mod profile_repository;
pub mod user_repository;
pub mod video_room_repository;

pub use checkin_repository::CheckinRepository;
pub use circle_repository::CircleRepository;
pub use course_repository::CourseRepository;
pub use event_repository::EventRepository;
pub use notification_repository::NotificationRepository;
pub use pomodoro_repository::PomodoroRepository;
pub use post_repository::PostRepository;
pub use profile_repository::{ProfileRepository, ProfileUpdate};
pub use user_repository::UserRepository;
pub use video_room_repository::VideoRoomRepository;
