use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学习进度业务实体
///
/// 每个 (student_id, course_id) 只有一条记录，由报名流程创建。
/// `completed_lesson_ids` 语义上是集合；`lessons_completed` 恒等于其长度。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct Progress {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub lessons_completed: i32,
    pub total_lessons: i32,
    pub percentage: i32,
    pub completed_lesson_ids: Vec<String>,
    // 首次达到 100% 时写入，此后不再清除
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
