use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 课时（课程大纲条目）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Lesson {
    // 稳定的课时标识
    pub lesson_id: String,
    pub title: String,
    // 时长（分钟）
    pub duration_minutes: i32,
    pub video_url: String,
    pub description: String,
}

/// 批次（报名窗口）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Batch {
    pub batch_id: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    // 容量与已报名数仅作记录，报名流程不做超售校验
    pub capacity: i32,
    pub enrolled_count: i32,
}

/// 课程详情
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructor_id: i64,
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub syllabus: Vec<Lesson>,
    pub batches: Vec<Batch>,
    pub enrollment_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 课程摘要（列表视图，不含大纲与批次）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseSummary {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub instructor_id: i64,
    pub price: f64,
    pub category: String,
    pub tags: Vec<String>,
    pub enrollment_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
