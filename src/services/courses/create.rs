use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::requests::CreateCourseRequest;
use crate::models::courses::responses::CourseResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    instructor_id: i64,
    req: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().len() < 3 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "Course title must be at least 3 characters",
        )));
    }
    if req.description.trim().len() < 10 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "Description must be at least 10 characters",
        )));
    }
    if req.price < 0.0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "Price must be non-negative",
        )));
    }

    match storage.create_course(instructor_id, req).await {
        Ok(course) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CourseResponse { course },
            "Course created successfully",
        ))),
        Err(e) => {
            error!("Error creating course: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CourseCreateFailed,
                    "Failed to create course",
                )),
            )
        }
    }
}
