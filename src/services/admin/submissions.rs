use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::assignments::responses::SubmissionListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_submissions(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_all_submissions().await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmissionListResponse { submissions },
            "查询成功",
        ))),
        Err(e) => {
            error!("Error listing submissions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch submissions",
                )),
            )
        }
    }
}
