//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod courses;
mod enrollments;
mod progress;
mod quizzes;
mod users;

use crate::config::AppConfig;
use crate::errors::{LMSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（从全局配置读取连接参数）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::from_url(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 按给定连接参数创建存储实例并运行迁移
    ///
    /// 集成测试用 `sqlite::memory:` 走这个入口。
    pub async fn from_url(url: &str, pool_size: u32, timeout_secs: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout_secs).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout_secs).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(
        url: &str,
        pool_size: u32,
        timeout_secs: u64,
    ) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(timeout_secs))
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            // 含 sqlite://path、sqlite::memory: 与 sqlite:file:...?cache=shared 形式
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;

#[async_trait::async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    async fn create_course(
        &self,
        instructor_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course> {
        self.create_course_impl(instructor_id, course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    async fn count_courses(&self) -> Result<u64> {
        self.count_courses_impl().await
    }

    async fn get_enrollment_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_student_and_course_impl(student_id, course_id)
            .await
    }

    async fn enroll_student(
        &self,
        student_id: i64,
        course_id: i64,
        batch_id: &str,
    ) -> Result<(Enrollment, Progress)> {
        self.enroll_student_impl(student_id, course_id, batch_id)
            .await
    }

    async fn list_student_courses(&self, student_id: i64) -> Result<Vec<StudentCourseItem>> {
        self.list_student_courses_impl(student_id).await
    }

    async fn list_all_enrollments(&self) -> Result<Vec<AdminEnrollmentItem>> {
        self.list_all_enrollments_impl().await
    }

    async fn count_enrollments(&self) -> Result<u64> {
        self.count_enrollments_impl().await
    }

    async fn get_progress_by_student_and_course(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Progress>> {
        self.get_progress_by_student_and_course_impl(student_id, course_id)
            .await
    }

    async fn complete_lesson(
        &self,
        student_id: i64,
        course_id: i64,
        lesson_id: &str,
    ) -> Result<Option<Progress>> {
        self.complete_lesson_impl(student_id, course_id, lesson_id)
            .await
    }

    async fn create_assignment(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        self.create_assignment_impl(req).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_by_lesson(
        &self,
        course_id: i64,
        lesson_id: &str,
    ) -> Result<Vec<Assignment>> {
        self.list_assignments_by_lesson_impl(course_id, lesson_id)
            .await
    }

    async fn create_submission(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission_text: Option<String>,
        submission_link: Option<String>,
    ) -> Result<AssignmentSubmission> {
        self.create_submission_impl(assignment_id, student_id, submission_text, submission_link)
            .await
    }

    async fn grade_submission(
        &self,
        assignment_id: i64,
        submission_id: i64,
        score: Option<i32>,
        feedback: Option<String>,
    ) -> Result<Option<AssignmentSubmission>> {
        self.grade_submission_impl(assignment_id, submission_id, score, feedback)
            .await
    }

    async fn list_all_submissions(&self) -> Result<Vec<AdminSubmissionItem>> {
        self.list_all_submissions_impl().await
    }

    async fn count_assignments(&self) -> Result<u64> {
        self.count_assignments_impl().await
    }

    async fn create_quiz(&self, req: CreateQuizRequest) -> Result<Quiz> {
        self.create_quiz_impl(req).await
    }

    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(quiz_id).await
    }

    async fn list_quizzes_by_lesson(&self, course_id: i64, lesson_id: &str) -> Result<Vec<Quiz>> {
        self.list_quizzes_by_lesson_impl(course_id, lesson_id).await
    }

    async fn record_quiz_attempt(
        &self,
        quiz_id: i64,
        student_id: i64,
        answers: &[usize],
        score: i32,
        time_taken_secs: i32,
    ) -> Result<QuizAttempt> {
        self.record_quiz_attempt_impl(quiz_id, student_id, answers, score, time_taken_secs)
            .await
    }

    async fn list_all_quiz_attempts(&self) -> Result<Vec<AdminQuizAttemptItem>> {
        self.list_all_quiz_attempts_impl().await
    }
}
