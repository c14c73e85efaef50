use serde::Serialize;
use ts_rs::TS;

use super::entities::{Quiz, QuizAttempt};

/// 测验响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizResponse {
    pub quiz: Quiz,
}

/// 测验列表响应（管理端按课时查询）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizListResponse {
    pub quizzes: Vec<Quiz>,
}

/// 测验提交响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizSubmitResponse {
    pub attempt: QuizAttempt,
    pub passed: bool,
    pub passing_score: i32,
}

/// 管理端答题记录条目（附测验/课程/学生信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct AdminQuizAttemptItem {
    pub attempt: QuizAttempt,
    pub quiz_title: String,
    pub course_title: String,
    pub student_name: String,
    pub student_email: String,
    pub passing_score: i32,
    pub passed: bool,
}

/// 管理端答题记录列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttemptListResponse {
    pub attempts: Vec<AdminQuizAttemptItem>,
}
