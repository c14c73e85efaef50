use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::courses::requests::LessonMaterialsQuery;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::progress::requests::UpdateProgressRequest;
use crate::models::quizzes::requests::SubmitQuizRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// 报名课程
pub async fn enroll_course(
    req: HttpRequest,
    body: web::Json<EnrollRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE
        .enroll_course(&req, user_id, body.into_inner())
        .await
}

// 已报名课程列表
pub async fn list_student_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE.list_student_courses(&req, user_id).await
}

// 上报课时完成
pub async fn update_progress(
    req: HttpRequest,
    body: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE
        .update_progress(&req, user_id, body.into_inner())
        .await
}

// 提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE
        .submit_assignment(&req, user_id, body.into_inner())
        .await
}

// 提交测验
pub async fn submit_quiz(
    req: HttpRequest,
    body: web::Json<SubmitQuizRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    STUDENT_SERVICE
        .submit_quiz(&req, user_id, body.into_inner())
        .await
}

// 课时素材
pub async fn get_lesson_materials(
    req: HttpRequest,
    query: web::Query<LessonMaterialsQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_lesson_materials(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/student")
            .wrap(middlewares::RequireJWT)
            .route("/enroll", web::post().to(enroll_course))
            .route("/courses", web::get().to(list_student_courses))
            .route("/materials", web::get().to(get_lesson_materials))
            .route("/progress", web::post().to(update_progress))
            .route("/assignments", web::post().to(submit_assignment))
            .route("/quiz/submit", web::post().to(submit_quiz)),
    );
}
