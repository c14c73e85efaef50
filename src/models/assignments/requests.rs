use serde::Deserialize;
use ts_rs::TS;

// 作业创建请求（管理端）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub course_id: i64,
    pub lesson_id: String,
    pub title: String,
    pub description: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub max_score: Option<i32>,
}

// 作业提交请求，text 与 link 至少其一
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmitAssignmentRequest {
    pub assignment_id: i64,
    #[serde(default)]
    pub submission_text: Option<String>,
    #[serde(default)]
    pub submission_link: Option<String>,
}

// 评分请求（管理端）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct GradeSubmissionRequest {
    pub assignment_id: i64,
    pub submission_id: i64,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub feedback: Option<String>,
}
