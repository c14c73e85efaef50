pub mod attempts;
pub mod enrollments;
pub mod grade;
pub mod materials;
pub mod stats;
pub mod submissions;
pub mod users;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{CreateAssignmentRequest, GradeSubmissionRequest};
use crate::models::quizzes::requests::CreateQuizRequest;
use crate::models::users::requests::UserListQuery;
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 概览统计
    pub async fn get_dashboard_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::get_dashboard_stats(self, request).await
    }

    /// 用户列表
    pub async fn list_users(
        &self,
        request: &HttpRequest,
        query: UserListQuery,
    ) -> ActixResult<HttpResponse> {
        users::list_users(self, request, query).await
    }

    /// 全部报名记录
    pub async fn list_enrollments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        enrollments::list_enrollments(self, request).await
    }

    /// 全部作业提交
    pub async fn list_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        submissions::list_submissions(self, request).await
    }

    /// 全部测验答题记录
    pub async fn list_quiz_attempts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        attempts::list_quiz_attempts(self, request).await
    }

    /// 作业评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, req).await
    }

    /// 创建作业
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        materials::create_assignment(self, request, req).await
    }

    /// 创建测验
    pub async fn create_quiz(
        &self,
        request: &HttpRequest,
        req: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        materials::create_quiz(self, request, req).await
    }

    /// 列出某课时的作业
    pub async fn list_lesson_assignments(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lesson_id: String,
    ) -> ActixResult<HttpResponse> {
        materials::list_lesson_assignments(self, request, course_id, lesson_id).await
    }

    /// 列出某课时的测验
    pub async fn list_lesson_quizzes(
        &self,
        request: &HttpRequest,
        course_id: i64,
        lesson_id: String,
    ) -> ActixResult<HttpResponse> {
        materials::list_lesson_quizzes(self, request, course_id, lesson_id).await
    }
}
