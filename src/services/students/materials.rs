use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::courses::requests::LessonMaterialsQuery;
use crate::models::courses::responses::LessonMaterialsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_lesson_materials(
    service: &StudentService,
    request: &HttpRequest,
    query: LessonMaterialsQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignments = match storage
        .list_assignments_by_lesson(query.course_id, &query.lesson_id)
        .await
    {
        Ok(assignments) => assignments,
        Err(e) => {
            error!("Error fetching lesson assignments: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch lesson materials",
                )),
            );
        }
    };

    // 提交与答题记录存在独立表中，素材响应天然不包含它们
    match storage
        .list_quizzes_by_lesson(query.course_id, &query.lesson_id)
        .await
    {
        Ok(quizzes) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            LessonMaterialsResponse {
                assignments,
                quizzes,
            },
            "查询成功",
        ))),
        Err(e) => {
            error!("Error fetching lesson quizzes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to fetch lesson materials",
                )),
            )
        }
    }
}
