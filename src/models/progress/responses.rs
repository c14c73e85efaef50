use serde::Serialize;
use ts_rs::TS;

use super::entities::Progress;

/// 进度响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct ProgressResponse {
    pub progress: Progress,
}
