use serde::Deserialize;
use ts_rs::TS;

/// 题目选项输入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuestionOptionInput {
    pub text: String,
    pub is_correct: bool,
}

/// 题目输入
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuestionInput {
    pub question_text: String,
    pub options: Vec<QuestionOptionInput>,
    #[serde(default)]
    pub explanation: Option<String>,
}

// 测验创建请求（管理端）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateQuizRequest {
    pub course_id: i64,
    pub lesson_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub passing_score: Option<i32>,
    pub questions: Vec<QuestionInput>,
}

// 测验提交请求，answers 长度必须等于题目数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct SubmitQuizRequest {
    pub quiz_id: i64,
    pub answers: Vec<usize>,
    pub time_taken_secs: i32,
}
