pub mod admin;
pub mod auth;
pub mod courses;
pub mod students;

pub use admin::AdminService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use students::StudentService;
