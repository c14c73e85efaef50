use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::enrollments::responses::EnrollmentListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_enrollments(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_enrollments().await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollmentListResponse { enrollments },
            "查询成功",
        ))),
        Err(e) => {
            error!("Error listing enrollments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch enrollments",
                )),
            )
        }
    }
}
