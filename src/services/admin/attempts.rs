use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::quizzes::responses::QuizAttemptListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_quiz_attempts(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_quiz_attempts().await {
        Ok(attempts) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuizAttemptListResponse { attempts },
            "查询成功",
        ))),
        Err(e) => {
            error!("Error listing quiz attempts: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch quiz attempts",
                )),
            )
        }
    }
}
