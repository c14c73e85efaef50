use serde::Serialize;
use ts_rs::TS;

use super::entities::{Course, CourseSummary};
use crate::models::PaginationInfo;
use crate::models::assignments::entities::Assignment;
use crate::models::quizzes::entities::Quiz;

/// 课程详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseResponse {
    pub course: Course,
}

/// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<CourseSummary>,
    pub pagination: PaginationInfo,
}

/// 课时素材响应（作业与测验，不含提交/答题记录）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct LessonMaterialsResponse {
    pub assignments: Vec<Assignment>,
    pub quizzes: Vec<Quiz>,
}
