// Typed resource clients, one per backend resource. All of them share the
// same `ApiClient` and therefore the same session and refresh state.

pub mod attendance;
pub mod courses;
pub mod dashboard;
pub mod lesson_notes;
pub mod lessons;
pub mod locations;
pub mod rankings;
pub mod student_lesson_notes;
pub mod students;
pub mod users;

pub use attendance::AttendanceService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use lesson_notes::LessonNoteService;
pub use lessons::LessonService;
pub use locations::LocationService;
pub use rankings::RankingService;
pub use student_lesson_notes::StudentLessonNoteService;
pub use students::StudentService;
pub use users::UserService;
