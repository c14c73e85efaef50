pub mod admin;

pub mod auth;

pub mod courses;

pub mod student;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use student::configure_student_routes;
