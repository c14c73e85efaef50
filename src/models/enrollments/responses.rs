use serde::Serialize;
use ts_rs::TS;

use super::entities::Enrollment;
use crate::models::courses::entities::CourseSummary;
use crate::models::progress::entities::Progress;

/// 报名响应（报名流程同时创建进度记录）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentResponse {
    pub enrollment: Enrollment,
    pub progress: Progress,
}

/// 学生课程列表条目（报名 + 课程摘要 + 进度）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct StudentCourseItem {
    pub enrollment: Enrollment,
    pub course: CourseSummary,
    pub progress: Option<Progress>,
}

/// 学生课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct StudentCourseListResponse {
    pub courses: Vec<StudentCourseItem>,
}

/// 管理端报名列表条目（附课程与学生信息）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct AdminEnrollmentItem {
    pub enrollment: Enrollment,
    pub course_title: String,
    pub student_name: String,
    pub student_email: String,
}

/// 管理端报名列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListResponse {
    pub enrollments: Vec<AdminEnrollmentItem>,
}
