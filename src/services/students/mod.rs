pub mod assignments;
pub mod courses;
pub mod enroll;
pub mod materials;
pub mod progress;
pub mod quizzes;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::courses::requests::LessonMaterialsQuery;
use crate::models::enrollments::requests::EnrollRequest;
use crate::models::progress::requests::UpdateProgressRequest;
use crate::models::quizzes::requests::SubmitQuizRequest;
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    /// 报名课程
    pub async fn enroll_course(
        &self,
        request: &HttpRequest,
        student_id: i64,
        req: EnrollRequest,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_course(self, request, student_id, req).await
    }

    /// 已报名课程列表（附进度）
    pub async fn list_student_courses(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        courses::list_student_courses(self, request, student_id).await
    }

    /// 上报课时完成
    pub async fn update_progress(
        &self,
        request: &HttpRequest,
        student_id: i64,
        req: UpdateProgressRequest,
    ) -> ActixResult<HttpResponse> {
        progress::update_progress(self, request, student_id, req).await
    }

    /// 提交作业
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        student_id: i64,
        req: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        assignments::submit_assignment(self, request, student_id, req).await
    }

    /// 提交测验
    pub async fn submit_quiz(
        &self,
        request: &HttpRequest,
        student_id: i64,
        req: SubmitQuizRequest,
    ) -> ActixResult<HttpResponse> {
        quizzes::submit_quiz(self, request, student_id, req).await
    }

    /// 课时素材（作业与测验）
    pub async fn get_lesson_materials(
        &self,
        request: &HttpRequest,
        query: LessonMaterialsQuery,
    ) -> ActixResult<HttpResponse> {
        materials::get_lesson_materials(self, request, query).await
    }
}
