use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::users::requests::UserListQuery;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_users(
    service: &AdminService,
    request: &HttpRequest,
    query: UserListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // password_hash 在序列化层被跳过，响应中不会出现
    match storage.list_users_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => {
            error!("Error listing users: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch users",
                )),
            )
        }
    }
}
