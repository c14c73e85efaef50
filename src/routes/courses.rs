use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::courses::requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CourseService;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// 课程列表（公开）
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

// 课程详情（公开）
pub async fn get_course(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, path.into_inner()).await
}

// 创建课程（管理员）
pub async fn create_course(
    req: HttpRequest,
    body: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    let user = match RequireJWT::extract_user_claims(&req) {
        Some(u) => u,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    COURSE_SERVICE
        .create_course(&req, user.id, body.into_inner())
        .await
}

// 更新课程（管理员）
pub async fn update_course(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, path.into_inner(), body.into_inner())
        .await
}

// 删除课程（管理员）
pub async fn delete_course(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, path.into_inner()).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    // 管理端路由需注册在公开的 /{id} 之前
    cfg.service(
        web::scope("/api/courses/admin")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/create", web::post().to(create_course))
            .route("/{id}", web::put().to(update_course))
            .route("/{id}", web::delete().to(delete_course)),
    );

    // 公开目录
    cfg.service(
        web::scope("/api/courses")
            .route("", web::get().to(list_courses))
            .route("/{id}", web::get().to(get_course)),
    );
}
