use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{Courses, QuizAttempts, QuizQuestions, Quizzes, Users};
use crate::entity::{courses, quiz_attempts, quiz_questions, quizzes, users};
use crate::errors::{LMSystemError, Result};
use crate::models::quizzes::{
    entities::{Quiz, QuizAttempt},
    requests::CreateQuizRequest,
    responses::AdminQuizAttemptItem,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建测验（测验与题目在同一事务内写入）
    pub async fn create_quiz_impl(&self, req: CreateQuizRequest) -> Result<Quiz> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let quiz = quizzes::ActiveModel {
            course_id: Set(req.course_id),
            lesson_id: Set(req.lesson_id),
            title: Set(req.title),
            description: Set(req.description),
            passing_score: Set(req.passing_score.unwrap_or(70)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| LMSystemError::database_operation(format!("创建测验失败: {e}")))?;

        let question_models: Vec<quiz_questions::ActiveModel> = req
            .questions
            .into_iter()
            .enumerate()
            .map(|(position, q)| {
                let options: Vec<crate::models::quizzes::entities::QuestionOption> = q
                    .options
                    .into_iter()
                    .map(|o| crate::models::quizzes::entities::QuestionOption {
                        text: o.text,
                        is_correct: o.is_correct,
                    })
                    .collect();

                Ok(quiz_questions::ActiveModel {
                    quiz_id: Set(quiz.id),
                    position: Set(position as i32),
                    question_text: Set(q.question_text),
                    options: Set(serde_json::to_string(&options)?),
                    explanation: Set(q.explanation),
                    ..Default::default()
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if !question_models.is_empty() {
            QuizQuestions::insert_many(question_models)
                .exec(&txn)
                .await
                .map_err(|e| LMSystemError::database_operation(format!("写入题目失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_quiz_by_id_impl(quiz.id)
            .await?
            .ok_or_else(|| LMSystemError::database_operation("测验创建后读取失败"))
    }

    /// 通过 ID 获取测验（题目按 position 排序）
    pub async fn get_quiz_by_id_impl(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        let quiz = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询测验失败: {e}")))?;

        let Some(quiz) = quiz else {
            return Ok(None);
        };

        let questions = self.load_quiz_questions(&self.db, quiz_id).await?;

        Ok(Some(quiz.into_quiz(questions)))
    }

    /// 列出某课时的测验（含题目）
    pub async fn list_quizzes_by_lesson_impl(
        &self,
        course_id: i64,
        lesson_id: &str,
    ) -> Result<Vec<Quiz>> {
        let rows = Quizzes::find()
            .filter(quizzes::Column::CourseId.eq(course_id))
            .filter(quizzes::Column::LessonId.eq(lesson_id))
            .order_by_asc(quizzes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询测验列表失败: {e}")))?;

        let mut result = Vec::with_capacity(rows.len());
        for quiz in rows {
            let questions = self.load_quiz_questions(&self.db, quiz.id).await?;
            result.push(quiz.into_quiz(questions));
        }

        Ok(result)
    }

    /// 追加一条答题记录
    ///
    /// 不做重复答题限制，多次答题全部保留。
    pub async fn record_quiz_attempt_impl(
        &self,
        quiz_id: i64,
        student_id: i64,
        answers: &[usize],
        score: i32,
        time_taken_secs: i32,
    ) -> Result<QuizAttempt> {
        let model = quiz_attempts::ActiveModel {
            quiz_id: Set(quiz_id),
            student_id: Set(student_id),
            answers: Set(serde_json::to_string(answers)?),
            score: Set(score),
            attempted_at: Set(chrono::Utc::now().timestamp()),
            time_taken_secs: Set(time_taken_secs),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("创建答题记录失败: {e}")))?;

        Ok(result.into_attempt())
    }

    /// 管理端：全部答题记录（附测验/课程/学生信息），按答题时间倒序
    pub async fn list_all_quiz_attempts_impl(&self) -> Result<Vec<AdminQuizAttemptItem>> {
        let rows = QuizAttempts::find()
            .order_by_desc(quiz_attempts::Column::AttemptedAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询答题记录失败: {e}")))?;

        let quiz_ids: Vec<i64> = rows.iter().map(|a| a.quiz_id).collect();
        let student_ids: Vec<i64> = rows.iter().map(|a| a.student_id).collect();

        let quizzes_by_id: HashMap<i64, quizzes::Model> = Quizzes::find()
            .filter(quizzes::Column::Id.is_in(quiz_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询测验失败: {e}")))?
            .into_iter()
            .map(|q| (q.id, q))
            .collect();

        let course_ids: Vec<i64> = quizzes_by_id.values().map(|q| q.course_id).collect();
        let course_titles: HashMap<i64, String> = Courses::find()
            .filter(courses::Column::Id.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c.title))
            .collect();

        let students: HashMap<i64, users::Model> = Users::find()
            .filter(users::Column::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询用户失败: {e}")))?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let items = rows
            .into_iter()
            .map(|attempt| {
                let quiz = quizzes_by_id.get(&attempt.quiz_id);
                let quiz_title = quiz
                    .map(|q| q.title.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                let course_title = quiz
                    .and_then(|q| course_titles.get(&q.course_id).cloned())
                    .unwrap_or_else(|| "Unknown".to_string());
                let passing_score = quiz.map(|q| q.passing_score).unwrap_or(70);
                let (student_name, student_email) = students
                    .get(&attempt.student_id)
                    .map(|u| (u.name.clone(), u.email.clone()))
                    .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));
                let passed = attempt.score >= passing_score;

                AdminQuizAttemptItem {
                    attempt: attempt.into_attempt(),
                    quiz_title,
                    course_title,
                    student_name,
                    student_email,
                    passing_score,
                    passed,
                }
            })
            .collect();

        Ok(items)
    }

    /// 按 position 加载测验题目
    async fn load_quiz_questions<C: ConnectionTrait>(
        &self,
        conn: &C,
        quiz_id: i64,
    ) -> Result<Vec<quiz_questions::Model>> {
        QuizQuestions::find()
            .filter(quiz_questions::Column::QuizId.eq(quiz_id))
            .order_by_asc(quiz_questions::Column::Position)
            .all(conn)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询题目失败: {e}")))
    }
}
