use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::enrollments::responses::StudentCourseListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_student_courses(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 报名与进度为两个集合，这里做读取时合并（用户表不做冗余缓存）
    match storage.list_student_courses(student_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentCourseListResponse { courses },
            "查询成功",
        ))),
        Err(e) => {
            error!("Error listing courses for student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch courses",
                )),
            )
        }
    }
}
