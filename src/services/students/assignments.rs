use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::assignments::responses::SubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_link;

pub async fn submit_assignment(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 文本与链接至少其一
    let has_text = req
        .submission_text
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    let has_link = req
        .submission_link
        .as_deref()
        .is_some_and(|l| !l.trim().is_empty());
    if !has_text && !has_link {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "Either submission text or link must be provided",
        )));
    }
    if has_link
        && let Err(msg) = validate_link(req.submission_link.as_deref().unwrap_or_default())
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg)));
    }

    // 2. 作业必须存在
    match storage.get_assignment_by_id(req.assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Error fetching assignment {}: {}", req.assignment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionFailed,
                    "Failed to fetch assignment",
                )),
            );
        }
    }

    // 3. 追加提交记录；同一学生可多次提交，全部保留
    match storage
        .create_submission(
            req.assignment_id,
            student_id,
            req.submission_text,
            req.submission_link,
        )
        .await
    {
        Ok(submission) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SubmissionResponse { submission },
            "Assignment submitted successfully",
        ))),
        Err(e) => {
            error!("Error submitting assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionFailed,
                    "Failed to submit assignment",
                )),
            )
        }
    }
}
