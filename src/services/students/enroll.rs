use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::errors::LMSystemError;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::enrollments::responses::EnrollmentResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn enroll_course(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    req: EnrollRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 已报名则拒绝
    match storage
        .get_enrollment_by_student_and_course(student_id, req.course_id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "Already enrolled in this course",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Error checking enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "Failed to check enrollment",
                )),
            );
        }
    }

    // 2. 课程必须存在
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
                    ErrorCode::EnrollFailed,
                    "Failed to fetch course",
                )),
            );
        }
    }

    // 3. 创建报名与初始进度记录；并发下的重复报名由唯一索引兜底
    match storage
        .enroll_student(student_id, req.course_id, &req.batch_id)
        .await
    {
        Ok((enrollment, progress)) => Ok(HttpResponse::Created().json(ApiResponse::success(
            EnrollmentResponse {
                enrollment,
                progress,
            },
            "Enrolled successfully",
        ))),
        Err(e) if e.is_conflict() => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::AlreadyEnrolled,
            "Already enrolled in this course",
        ))),
        Err(LMSystemError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::CourseNotFound, "Course not found"),
        )),
        Err(e) => {
            error!("Error enrolling student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "Failed to enroll in course",
                )),
            )
        }
    }
}
