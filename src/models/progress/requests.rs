use serde::Deserialize;
use ts_rs::TS;

// 课时完成上报请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct UpdateProgressRequest {
    pub course_id: i64,
    pub lesson_id: String,
}
