use serde::Deserialize;
use ts_rs::TS;

// 报名请求
//
// batch_id 仅被记录，不校验批次容量。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollRequest {
    pub course_id: i64,
    pub batch_id: String,
}
