use serde::Serialize;
use ts_rs::TS;

use super::entities::{Assignment, AssignmentSubmission};

/// 提交响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmissionResponse {
    pub submission: AssignmentSubmission,
}

/// 作业响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentResponse {
    pub assignment: Assignment,
}

/// 作业列表响应（管理端按课时查询）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub assignments: Vec<Assignment>,
}

/// 评分结果响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct GradedSubmissionResponse {
    pub id: i64,
    pub score: Option<i32>,
    pub feedback: Option<String>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// 管理端提交列表条目（附作业/课程/学生信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AdminSubmissionItem {
    pub submission: AssignmentSubmission,
    pub assignment_title: String,
    pub course_title: String,
    pub student_name: String,
    pub student_email: String,
}

/// 管理端提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubmissionListResponse {
    pub submissions: Vec<AdminSubmissionItem>,
}
