//! 业务错误码
//!
//! code 为 0 表示成功，其余按领域分段：
//! 1xxx 通用，2xxx 用户，3xxx 课程，4xxx 报名，5xxx 进度，6xxx 作业，7xxx 测验。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    InternalServerError = 1000,
    Unauthorized = 1001,
    Forbidden = 1002,
    InvalidParams = 1003,
    NotFound = 1004,

    // 用户
    UserNotFound = 2001,
    UserEmailAlreadyExists = 2002,
    UserEmailInvalid = 2003,
    UserNameInvalid = 2004,
    UserPasswordInvalid = 2005,
    AuthFailed = 2006,
    RegisterFailed = 2007,

    // 课程
    CourseNotFound = 3001,
    CourseCreateFailed = 3002,
    CourseUpdateFailed = 3003,
    CourseDeleteFailed = 3004,

    // 报名
    AlreadyEnrolled = 4001,
    EnrollFailed = 4002,

    // 进度
    ProgressNotFound = 5001,
    ProgressUpdateFailed = 5002,

    // 作业
    AssignmentNotFound = 6001,
    SubmissionNotFound = 6002,
    SubmissionFailed = 6003,
    GradeFailed = 6004,
    ScoreOutOfRange = 6005,

    // 测验
    QuizNotFound = 7001,
    AnswerCountMismatch = 7002,
    QuizSubmitFailed = 7003,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::AlreadyEnrolled as i32, 4001);
        assert_eq!(ErrorCode::AnswerCountMismatch as i32, 7002);
    }
}
