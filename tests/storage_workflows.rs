//! 报名 / 进度 / 提交 / 评分工作流的存储层集成测试
//!
//! 每个用例使用独立的共享缓存内存 SQLite 数据库，迁移在连接时自动执行。

use rust_lmsystem_next::models::courses::requests::{
    CreateCourseRequest, LessonInput, UpdateCourseRequest,
};
use rust_lmsystem_next::models::enrollments::entities::EnrollmentStatus;
use rust_lmsystem_next::models::quizzes::requests::{
    CreateQuizRequest, QuestionInput, QuestionOptionInput,
};
use rust_lmsystem_next::models::users::entities::UserRole;
use rust_lmsystem_next::models::users::requests::CreateUserRequest;
use rust_lmsystem_next::models::assignments::requests::CreateAssignmentRequest;
use rust_lmsystem_next::storage::sea_orm_storage::SeaOrmStorage;
use rust_lmsystem_next::storage::Storage;
use rust_lmsystem_next::utils::scoring::quiz_score;

async fn connect(name: &str) -> SeaOrmStorage {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    SeaOrmStorage::from_url(&url, 1, 5).await.expect("connect")
}

async fn create_student(storage: &SeaOrmStorage, email: &str) -> i64 {
    storage
        .create_user(CreateUserRequest {
            name: "Test Student".to_string(),
            email: email.to_string(),
            password: "not-a-real-hash".to_string(),
            role: Some(UserRole::Student),
        })
        .await
        .expect("create student")
        .id
}

async fn create_instructor(storage: &SeaOrmStorage, email: &str) -> i64 {
    storage
        .create_user(CreateUserRequest {
            name: "Test Instructor".to_string(),
            email: email.to_string(),
            password: "not-a-real-hash".to_string(),
            role: Some(UserRole::Admin),
        })
        .await
        .expect("create instructor")
        .id
}

fn lesson_input(lesson_id: &str, title: &str) -> LessonInput {
    LessonInput {
        lesson_id: Some(lesson_id.to_string()),
        title: title.to_string(),
        duration_minutes: 30,
        video_url: format!("https://cdn.example.com/videos/{lesson_id}.mp4"),
        description: format!("Lesson {title}"),
    }
}

async fn create_course_with_lessons(
    storage: &SeaOrmStorage,
    instructor_id: i64,
    lesson_ids: &[&str],
) -> i64 {
    let syllabus: Vec<LessonInput> = lesson_ids
        .iter()
        .map(|id| lesson_input(id, &format!("Lesson {id}")))
        .collect();

    storage
        .create_course(
            instructor_id,
            CreateCourseRequest {
                title: "Rust Web Development".to_string(),
                description: "Build backend services with actix-web".to_string(),
                price: 49.0,
                category: "programming".to_string(),
                tags: Some(vec!["rust".to_string(), "backend".to_string()]),
                syllabus: Some(syllabus),
                batches: None,
            },
        )
        .await
        .expect("create course")
        .id
}

#[tokio::test]
async fn enroll_creates_progress_and_rejects_duplicate() {
    let storage = connect("memdb_enroll").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1", "l2", "l3", "l4"]).await;

    let (enrollment, progress) = storage
        .enroll_student(student, course, "batch-1")
        .await
        .expect("first enrollment succeeds");

    assert_eq!(enrollment.status, EnrollmentStatus::Active);
    assert_eq!(enrollment.batch_id, "batch-1");
    assert_eq!(progress.total_lessons, 4);
    assert_eq!(progress.lessons_completed, 0);
    assert_eq!(progress.percentage, 0);
    assert!(progress.completed_lesson_ids.is_empty());
    assert!(progress.completed_at.is_none());

    // 第二次报名撞唯一索引，必须以 Conflict 上报
    let err = storage
        .enroll_student(student, course, "batch-2")
        .await
        .expect_err("duplicate enrollment must fail");
    assert!(err.is_conflict(), "expected conflict, got: {err}");

    // 冲突之后报名与进度仍然各只有一条，课程报名数只被累加一次
    let existing = storage
        .get_enrollment_by_student_and_course(student, course)
        .await
        .unwrap()
        .expect("enrollment still present");
    assert_eq!(existing.id, enrollment.id);
    assert_eq!(existing.batch_id, "batch-1");

    let stored_progress = storage
        .get_progress_by_student_and_course(student, course)
        .await
        .unwrap()
        .expect("progress still present");
    assert_eq!(stored_progress.id, progress.id);

    assert_eq!(storage.count_enrollments().await.unwrap(), 1);
    let course_detail = storage
        .get_course_by_id(course)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(course_detail.enrollment_count, 1);
}

#[tokio::test]
async fn enroll_missing_course_is_not_found() {
    let storage = connect("memdb_enroll_missing").await;
    let student = create_student(&storage, "student@example.com").await;

    let err = storage
        .enroll_student(student, 424242, "batch-1")
        .await
        .expect_err("enrolling into a missing course must fail");
    assert!(
        matches!(
            err,
            rust_lmsystem_next::errors::LMSystemError::NotFound(_)
        ),
        "expected NotFound, got: {err}"
    );
    assert_eq!(storage.count_enrollments().await.unwrap(), 0);
}

#[tokio::test]
async fn four_lessons_progress_to_completion() {
    let storage = connect("memdb_progress_e2e").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1", "l2", "l3", "l4"]).await;

    storage
        .enroll_student(student, course, "batch-1")
        .await
        .unwrap();

    for (lesson, completed, percentage) in [("l1", 1, 25), ("l2", 2, 50), ("l3", 3, 75)] {
        let progress = storage
            .complete_lesson(student, course, lesson)
            .await
            .unwrap()
            .expect("progress record exists");
        assert_eq!(progress.lessons_completed, completed);
        assert_eq!(progress.percentage, percentage);
        assert!(
            progress.completed_at.is_none(),
            "completed_at must stay unset before 100%"
        );
    }

    // 第四课：到达 100%，completed_at 恰在此刻写入
    let done = storage
        .complete_lesson(student, course, "l4")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(done.lessons_completed, 4);
    assert_eq!(done.percentage, 100);
    assert!(done.completed_at.is_some());
    assert_eq!(
        done.completed_lesson_ids,
        vec!["l1", "l2", "l3", "l4"]
    );
}

#[tokio::test]
async fn completing_same_lesson_twice_is_idempotent() {
    let storage = connect("memdb_progress_idem").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1", "l2", "l3"]).await;

    storage
        .enroll_student(student, course, "batch-1")
        .await
        .unwrap();

    let first = storage
        .complete_lesson(student, course, "l1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.lessons_completed, 1);
    assert_eq!(first.percentage, 33);

    // 重复标记同一课时：状态原样返回，不产生重复条目
    let second = storage
        .complete_lesson(student, course, "l1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.lessons_completed, 1);
    assert_eq!(second.percentage, 33);
    assert_eq!(second.completed_lesson_ids, vec!["l1"]);
    assert_eq!(second.updated_at, first.updated_at);
}

#[tokio::test]
async fn completed_at_survives_syllabus_growth() {
    let storage = connect("memdb_progress_stale").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1"]).await;

    storage
        .enroll_student(student, course, "batch-1")
        .await
        .unwrap();
    let done = storage
        .complete_lesson(student, course, "l1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(done.percentage, 100);
    let completed_at = done.completed_at.expect("completed_at set at 100%");

    // 大纲扩充后 completed_at 保留为历史快照，total_lessons 也不回填
    storage
        .update_course(
            course,
            UpdateCourseRequest {
                title: None,
                description: None,
                price: None,
                category: None,
                tags: None,
                syllabus: Some(vec![
                    lesson_input("l1", "Lesson l1"),
                    lesson_input("l2", "Lesson l2"),
                ]),
                batches: None,
            },
        )
        .await
        .unwrap();

    let after = storage
        .complete_lesson(student, course, "l2")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.completed_at, Some(completed_at));
    assert_eq!(after.total_lessons, 1);
}

#[tokio::test]
async fn progress_update_without_record_returns_none() {
    let storage = connect("memdb_progress_none").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1"]).await;

    // 未报名即无进度记录：不自动创建
    let result = storage
        .complete_lesson(student, course, "l1")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn assignment_submissions_accumulate_and_grade_by_id() {
    let storage = connect("memdb_assignments").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1"]).await;

    let assignment = storage
        .create_assignment(CreateAssignmentRequest {
            course_id: course,
            lesson_id: "l1".to_string(),
            title: "Build a REST API".to_string(),
            description: "Implement the enrollment endpoint".to_string(),
            due_date: chrono::Utc::now() + chrono::Duration::days(7),
            max_score: None,
        })
        .await
        .expect("create assignment");
    assert_eq!(assignment.max_score, 100);

    // 同一学生可提交多次，全部保留
    let first = storage
        .create_submission(
            assignment.id,
            student,
            Some("first draft".to_string()),
            None,
        )
        .await
        .unwrap();
    let second = storage
        .create_submission(
            assignment.id,
            student,
            None,
            Some("https://github.com/example/solution".to_string()),
        )
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
    assert!(first.score.is_none());

    // 评分未知的提交号：返回 None，已有提交不被触碰
    let missing = storage
        .grade_submission(assignment.id, 9999, Some(60), None)
        .await
        .unwrap();
    assert!(missing.is_none());

    // 提交号属于别的作业同样不可见
    let wrong_parent = storage
        .grade_submission(assignment.id + 1, first.id, Some(60), None)
        .await
        .unwrap();
    assert!(wrong_parent.is_none());

    let untouched = storage.list_all_submissions().await.unwrap();
    assert_eq!(untouched.len(), 2);
    assert!(untouched.iter().all(|s| s.submission.score.is_none()));

    // 正常评分写入 score/feedback/graded_at
    let graded = storage
        .grade_submission(
            assignment.id,
            first.id,
            Some(95),
            Some("Well structured".to_string()),
        )
        .await
        .unwrap()
        .expect("submission found");
    assert_eq!(graded.score, Some(95));
    assert_eq!(graded.feedback.as_deref(), Some("Well structured"));
    assert!(graded.graded_at.is_some());

    // 另一份提交保持未评分
    let all = storage.list_all_submissions().await.unwrap();
    let ungraded = all
        .iter()
        .find(|s| s.submission.id == second.id)
        .expect("second submission listed");
    assert!(ungraded.submission.score.is_none());
}

#[tokio::test]
async fn quiz_attempts_accumulate_with_computed_scores() {
    let storage = connect("memdb_quizzes").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1"]).await;

    let quiz = storage
        .create_quiz(CreateQuizRequest {
            course_id: course,
            lesson_id: "l1".to_string(),
            title: "Ownership basics".to_string(),
            description: None,
            passing_score: Some(70),
            questions: vec![
                QuestionInput {
                    question_text: "What does Box<T> provide?".to_string(),
                    options: vec![
                        QuestionOptionInput {
                            text: "Heap allocation".to_string(),
                            is_correct: true,
                        },
                        QuestionOptionInput {
                            text: "Garbage collection".to_string(),
                            is_correct: false,
                        },
                    ],
                    explanation: None,
                },
                QuestionInput {
                    question_text: "Which trait enables cloning?".to_string(),
                    options: vec![
                        QuestionOptionInput {
                            text: "Copy".to_string(),
                            is_correct: false,
                        },
                        QuestionOptionInput {
                            text: "Clone".to_string(),
                            is_correct: true,
                        },
                    ],
                    explanation: Some("Clone is the explicit deep-copy trait".to_string()),
                },
            ],
        })
        .await
        .expect("create quiz");
    assert_eq!(quiz.questions.len(), 2);

    // 全对与半对两次作答，记录全部保留
    let perfect = [0usize, 1usize];
    let partial = [0usize, 0usize];
    let perfect_score = quiz_score(&perfect, &quiz.questions);
    let partial_score = quiz_score(&partial, &quiz.questions);
    assert_eq!(perfect_score, 100);
    assert_eq!(partial_score, 50);

    storage
        .record_quiz_attempt(quiz.id, student, &perfect, perfect_score, 120)
        .await
        .unwrap();
    storage
        .record_quiz_attempt(quiz.id, student, &partial, partial_score, 95)
        .await
        .unwrap();

    let attempts = storage.list_all_quiz_attempts().await.unwrap();
    assert_eq!(attempts.len(), 2);

    let passed: Vec<bool> = attempts.iter().map(|a| a.passed).collect();
    assert!(passed.contains(&true));
    assert!(passed.contains(&false));
    for attempt in &attempts {
        assert_eq!(attempt.passing_score, 70);
        assert_eq!(attempt.quiz_title, "Ownership basics");
        assert_eq!(attempt.student_email, "student@example.com");
    }
}

#[tokio::test]
async fn student_course_list_joins_progress() {
    let storage = connect("memdb_student_courses").await;
    let instructor = create_instructor(&storage, "teacher@example.com").await;
    let student = create_student(&storage, "student@example.com").await;
    let course = create_course_with_lessons(&storage, instructor, &["l1", "l2"]).await;

    storage
        .enroll_student(student, course, "batch-1")
        .await
        .unwrap();
    storage
        .complete_lesson(student, course, "l1")
        .await
        .unwrap();

    let courses = storage.list_student_courses(student).await.unwrap();
    assert_eq!(courses.len(), 1);
    let item = &courses[0];
    assert_eq!(item.course.id, course);
    assert_eq!(item.course.title, "Rust Web Development");
    let progress = item.progress.as_ref().expect("progress joined");
    assert_eq!(progress.lessons_completed, 1);
    assert_eq!(progress.percentage, 50);

    let enrollments = storage.list_all_enrollments().await.unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].course_title, "Rust Web Development");
    assert_eq!(enrollments[0].student_name, "Test Student");
}
