pub mod admin;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod progress;
pub mod quizzes;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间，用于运行状态上报
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
