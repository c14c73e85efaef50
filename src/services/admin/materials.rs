use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AdminService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::assignments::responses::{AssignmentListResponse, AssignmentResponse};
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::models::quizzes::responses::{QuizListResponse, QuizResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_assignment(
    service: &AdminService,
    request: &HttpRequest,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 作业必须挂在已存在的课程下
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
                    ErrorCode::InternalServerError,
                    "Failed to fetch course",
                )),
            );
        }
    }

    if let Some(max_score) = req.max_score
        && max_score <= 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "max_score must be positive",
        )));
    }

    match storage.create_assignment(req).await {
        Ok(assignment) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AssignmentResponse { assignment },
            "Assignment created successfully",
        ))),
        Err(e) => {
            error!("Error creating assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create assignment",
                )),
            )
        }
    }
}

pub async fn create_quiz(
    service: &AdminService,
    request: &HttpRequest,
    req: CreateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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
                    ErrorCode::InternalServerError,
                    "Failed to fetch course",
                )),
            );
        }
    }

    // 每道题至少要有一个选项，及格线在 [0, 100] 内
    if req.questions.iter().any(|q| q.options.is_empty()) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "Each question must have at least one option",
        )));
    }
    if let Some(passing_score) = req.passing_score
        && !(0..=100).contains(&passing_score)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "passing_score must be between 0 and 100",
        )));
    }

    match storage.create_quiz(req).await {
        Ok(quiz) => Ok(HttpResponse::Created().json(ApiResponse::success(
            QuizResponse { quiz },
            "Quiz created successfully",
        ))),
        Err(e) => {
            error!("Error creating quiz: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create quiz",
                )),
            )
        }
    }
}

pub async fn list_lesson_assignments(
    service: &AdminService,
    request: &HttpRequest,
    course_id: i64,
    lesson_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_assignments_by_lesson(course_id, &lesson_id)
        .await
    {
        Ok(assignments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentListResponse { assignments },
            "查询成功",
        ))),
        Err(e) => {
            error!("Error listing lesson assignments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch assignments",
                )),
            )
        }
    }
}

pub async fn list_lesson_quizzes(
    service: &AdminService,
    request: &HttpRequest,
    course_id: i64,
    lesson_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_quizzes_by_lesson(course_id, &lesson_id).await {
        Ok(quizzes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuizListResponse { quizzes },
            "查询成功",
        ))),
        Err(e) => {
            error!("Error listing lesson quizzes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch quizzes",
                )),
            )
        }
    }
}
