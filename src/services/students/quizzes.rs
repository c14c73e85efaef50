use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::quizzes::requests::SubmitQuizRequest;
use crate::models::quizzes::responses::QuizSubmitResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::scoring::quiz_score;

pub async fn submit_quiz(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    req: SubmitQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.time_taken_secs <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "time_taken_secs must be positive",
        )));
    }

    // 1. 测验必须存在
    let quiz = match storage.get_quiz_by_id(req.quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => {
            error!("Error fetching quiz {}: {}", req.quiz_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::QuizSubmitFailed,
                    "Failed to fetch quiz",
                )),
            );
        }
    };

    // 2. 答案数必须与题目数一致，否则不落任何记录
    if req.answers.len() != quiz.questions.len() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AnswerCountMismatch,
            "Invalid number of answers",
        )));
    }

    // 3. 计分并追加答题记录；多次答题全部保留
    let score = quiz_score(&req.answers, &quiz.questions);
    let passed = score >= quiz.passing_score;

    match storage
        .record_quiz_attempt(
            req.quiz_id,
            student_id,
            &req.answers,
            score,
            req.time_taken_secs,
        )
        .await
    {
        Ok(attempt) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuizSubmitResponse {
                attempt,
                passed,
                passing_score: quiz.passing_score,
            },
            "Quiz submitted",
        ))),
        Err(e) => {
            error!("Error recording quiz attempt: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::QuizSubmitFailed,
                    "Failed to submit quiz",
                )),
            )
        }
    }
}
