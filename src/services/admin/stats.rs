use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use super::AdminService;
use crate::models::admin::responses::DashboardStatsResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, AppStartTime, ErrorCode};

pub async fn get_dashboard_stats(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let total_courses = storage.count_courses().await;
    let total_students = storage.count_users_by_role(UserRole::Student).await;
    let total_enrollments = storage.count_enrollments().await;
    let total_assignments = storage.count_assignments().await;

    let (total_courses, total_students, total_enrollments, total_assignments) =
        match (total_courses, total_students, total_enrollments, total_assignments) {
            (Ok(c), Ok(s), Ok(e), Ok(a)) => (c as i64, s as i64, e as i64, a as i64),
            (c, s, e, a) => {
                let err = [
                    c.err().map(|e| e.to_string()),
                    s.err().map(|e| e.to_string()),
                    e.err().map(|e| e.to_string()),
                    a.err().map(|e| e.to_string()),
                ]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join("; ");
                error!("Error fetching dashboard stats: {}", err);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to fetch dashboard stats",
                    )),
                );
            }
        };

    let uptime_secs = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or(0);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DashboardStatsResponse {
            total_courses,
            total_students,
            total_enrollments,
            total_assignments,
            uptime_secs,
        },
        "查询成功",
    )))
}
