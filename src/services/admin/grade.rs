use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::assignments::requests::GradeSubmissionRequest;
use crate::models::assignments::responses::GradedSubmissionResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn grade_submission(
    service: &AdminService,
    request: &HttpRequest,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 分数（若提供）必须在 [0, 100] 内
    if let Some(score) = req.score
        && !(0..=100).contains(&score)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ScoreOutOfRange,
            "Score must be between 0 and 100",
        )));
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
                    ErrorCode::GradeFailed,
                    "Failed to fetch assignment",
                )),
            );
        }
    }

    // 3. 按 (assignment_id, submission_id) 定位提交并写入评分
    match storage
        .grade_submission(req.assignment_id, req.submission_id, req.score, req.feedback)
        .await
    {
        Ok(Some(submission)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GradedSubmissionResponse {
                id: submission.id,
                score: submission.score,
                feedback: submission.feedback,
                graded_at: submission.graded_at,
            },
            "Assignment graded successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => {
            error!("Error grading submission {}: {}", req.submission_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GradeFailed,
                    "Failed to grade assignment",
                )),
            )
        }
    }
}
