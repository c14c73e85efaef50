//! 请求参数错误处理器
//!
//! 将 actix-web 的 JSON / 查询参数反序列化错误统一包装为 ApiResponse。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body too large".to_string()
        }
        other => format!("Invalid request body: {other}"),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::InvalidParams,
        message,
    ));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query payload error on {}: {}", req.path(), err);

    let message = match &err {
        QueryPayloadError::Deserialize(e) => format!("Invalid query parameters: {e}"),
        other => format!("Invalid query parameters: {other}"),
    };

    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::InvalidParams,
        message,
    ));
    InternalError::from_response(err, response).into()
}
