use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::progress::requests::UpdateProgressRequest;
use crate::models::progress::responses::ProgressResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_progress(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    req: UpdateProgressRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 课程必须存在
    match storage.get_course_by_id(req.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            error!("Error fetching course {}: {}", req.course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ProgressUpdateFailed,
                    "Failed to fetch course",
                )),
            );
        }
    }

    // 2. 标记课时完成；进度记录缺失说明未报名，不自动补建
    match storage
        .complete_lesson(student_id, req.course_id, &req.lesson_id)
        .await
    {
        Ok(Some(progress)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProgressResponse { progress },
            "Progress updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProgressNotFound,
            "Progress record not found",
        ))),
        Err(e) => {
            error!(
                "Error updating progress for student {} course {}: {}",
                student_id, req.course_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ProgressUpdateFailed,
                    "Failed to update progress",
                )),
            )
        }
    }
}
