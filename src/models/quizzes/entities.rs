use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 题目选项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuestionOption {
    pub text: String,
    pub is_correct: bool,
}

/// 测验题目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Question {
    pub question_text: String,
    pub options: Vec<QuestionOption>,
    pub explanation: Option<String>,
}

/// 测验业务实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Quiz {
    pub id: i64,
    pub course_id: i64,
    pub lesson_id: String,
    pub title: String,
    pub description: Option<String>,
    pub questions: Vec<Question>,
    // 及格线，score >= passing_score 即通过
    pub passing_score: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 测验答题记录业务实体（只追加）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttempt {
    pub id: i64,
    pub quiz_id: i64,
    pub student_id: i64,
    // 按题目顺序的选项下标
    pub answers: Vec<usize>,
    pub score: i32,
    pub attempted_at: chrono::DateTime<chrono::Utc>,
    pub time_taken_secs: i32,
}
