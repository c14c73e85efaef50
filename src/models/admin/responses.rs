use serde::Serialize;
use ts_rs::TS;

/// 管理端概览统计
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct DashboardStatsResponse {
    pub total_courses: i64,
    pub total_students: i64,
    pub total_enrollments: i64,
    pub total_assignments: i64,
    pub uptime_secs: i64,
}
