use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{CreateAssignmentRequest, GradeSubmissionRequest};
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::UserListQuery;
use crate::services::AdminService;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

// 概览统计
pub async fn get_dashboard_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.get_dashboard_stats(&req).await
}

// 用户列表
pub async fn list_users(
    req: HttpRequest,
    query: web::Query<UserListQuery>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_users(&req, query.into_inner()).await
}

// 全部报名记录
pub async fn list_enrollments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_enrollments(&req).await
}

// 全部作业提交
pub async fn list_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_submissions(&req).await
}

// 全部测验答题记录
pub async fn list_quiz_attempts(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_quiz_attempts(&req).await
}

// 作业评分
pub async fn grade_submission(
    req: HttpRequest,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .grade_submission(&req, body.into_inner())
        .await
}

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

// 创建测验
pub async fn create_quiz(
    req: HttpRequest,
    body: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.create_quiz(&req, body.into_inner()).await
}

// 某课时的作业列表
pub async fn list_lesson_assignments(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (course_id, lesson_id) = path.into_inner();
    ADMIN_SERVICE
        .list_lesson_assignments(&req, course_id, lesson_id)
        .await
}

// 某课时的测验列表
pub async fn list_lesson_quizzes(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (course_id, lesson_id) = path.into_inner();
    ADMIN_SERVICE
        .list_lesson_quizzes(&req, course_id, lesson_id)
        .await
}

// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/stats", web::get().to(get_dashboard_stats))
            .route("/users", web::get().to(list_users))
            .route("/enrollments", web::get().to(list_enrollments))
            .route("/submissions", web::get().to(list_submissions))
            // 固定路径需注册在带参数的 /quizzes/{course_id}/{lesson_id} 之前
            .route("/quizzes/attempts", web::get().to(list_quiz_attempts))
            .route("/grade", web::post().to(grade_submission))
            .route("/assignments", web::post().to(create_assignment))
            .route("/quizzes", web::post().to(create_quiz))
            .route(
                "/assignments/{course_id}/{lesson_id}",
                web::get().to(list_lesson_assignments),
            )
            .route(
                "/quizzes/{course_id}/{lesson_id}",
                web::get().to(list_lesson_quizzes),
            ),
    );
}
