use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentSubmission},
        requests::CreateAssignmentRequest,
        responses::AdminSubmissionItem,
    },
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::Enrollment,
        responses::{AdminEnrollmentItem, StudentCourseItem},
    },
    progress::entities::Progress,
    quizzes::{
        entities::{Quiz, QuizAttempt},
        requests::CreateQuizRequest,
        responses::AdminQuizAttemptItem,
    },
    users::{
        entities::{User, UserRole},
        requests::{CreateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段须已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;
    // 按角色统计用户数
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 课程管理方法
    // 创建课程（含大纲与批次）
    async fn create_course(
        &self,
        instructor_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course>;
    // 通过ID获取课程详情
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程（搜索/分类/标签过滤，分页）
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 更新课程信息，提供 syllabus/batches 时整体替换
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, course_id: i64) -> Result<bool>;
    // 课程总数
    async fn count_courses(&self) -> Result<u64>;

    /// 报名与进度方法
    // 查询学生在某课程的报名记录
    async fn get_enrollment_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>>;
    // 报名：同一事务内创建报名与初始进度记录并累加课程报名数；
    // (course, student) 唯一索引冲突以 Conflict 错误上报
    async fn enroll_student(
        &self,
        student_id: i64,
        course_id: i64,
        batch_id: &str,
    ) -> Result<(Enrollment, Progress)>;
    // 学生已报名课程列表（附进度）
    async fn list_student_courses(&self, student_id: i64) -> Result<Vec<StudentCourseItem>>;
    // 管理端：全部报名记录，按创建时间倒序
    async fn list_all_enrollments(&self) -> Result<Vec<AdminEnrollmentItem>>;
    // 报名总数
    async fn count_enrollments(&self) -> Result<u64>;
    // 查询进度记录
    async fn get_progress_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Progress>>;
    // 标记课时完成：重复标记为幂等空操作；进度记录不存在时返回 None
    async fn complete_lesson(
        &self,
        student_id: i64,
        course_id: i64,
        lesson_id: &str,
    ) -> Result<Option<Progress>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出某课时的作业
    async fn list_assignments_by_lesson(
        &self,
        course_id: i64,
        lesson_id: &str,
    ) -> Result<Vec<Assignment>>;
    // 追加一条作业提交（不做重复提交限制）
    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission_text: Option<String>,
        submission_link: Option<String>,
    ) -> Result<AssignmentSubmission>;
    // 评分：按 (assignment_id, submission_id) 定位提交；不存在时返回 None
    async fn grade_submission(
        &self,
        assignment_id: i64,
        submission_id: i64,
        score: Option<i32>,
        feedback: Option<String>,
    ) -> Result<Option<AssignmentSubmission>>;
    // 管理端：全部作业提交，按提交时间倒序
    async fn list_all_submissions(&self) -> Result<Vec<AdminSubmissionItem>>;
    // 作业总数
    async fn count_assignments(&self) -> Result<u64>;

    /// 测验管理方法
    // 创建测验（含题目）
    async fn create_quiz(&self, req: CreateQuizRequest) -> Result<Quiz>;
    // 通过ID获取测验（含题目，按序）
    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>>;
    // 列出某课时的测验
    async fn list_quizzes_by_lesson(&self, course_id: i64, lesson_id: &str) -> Result<Vec<Quiz>>;
    // 追加一条答题记录（不做重复答题限制）
    async fn record_quiz_attempt(
        &self,
        quiz_id: i64,
        student_id: i64,
        answers: &[usize],
        score: i32,
        time_taken_secs: i32,
    ) -> Result<QuizAttempt>;
    // 管理端：全部答题记录，按答题时间倒序
    async fn list_all_quiz_attempts(&self) -> Result<Vec<AdminQuizAttemptItem>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
