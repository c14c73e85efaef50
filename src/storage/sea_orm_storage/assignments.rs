use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{AssignmentSubmissions, Assignments, Courses, Users};
use crate::entity::{assignment_submissions, assignments, courses, users};
use crate::errors::{LMSystemError, Result};
use crate::models::assignments::{
    entities::{Assignment, AssignmentSubmission},
    requests::CreateAssignmentRequest,
    responses::AdminSubmissionItem,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, req: CreateAssignmentRequest) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = assignments::ActiveModel {
            course_id: Set(req.course_id),
            lesson_id: Set(req.lesson_id),
            title: Set(req.title),
            description: Set(req.description),
            due_date: Set(req.due_date.timestamp()),
            max_score: Set(req.max_score.unwrap_or(100)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出某课时的作业
    pub async fn list_assignments_by_lesson_impl(
        &self,
        course_id: i64,
        lesson_id: &str,
    ) -> Result<Vec<Assignment>> {
        let rows = Assignments::find()
            .filter(assignments::Column::CourseId.eq(course_id))
            .filter(assignments::Column::LessonId.eq(lesson_id))
            .order_by_asc(assignments::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 追加一条作业提交
    ///
    /// 不做重复提交限制，同一学生的多次提交全部保留。
    pub async fn create_submission_impl(
        &self,
        assignment_id: i64,
        student_id: i64,
        submission_text: Option<String>,
        submission_link: Option<String>,
    ) -> Result<AssignmentSubmission> {
        let model = assignment_submissions::ActiveModel {
            assignment_id: Set(assignment_id),
            student_id: Set(student_id),
            submission_text: Set(submission_text),
            submission_link: Set(submission_link),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            score: Set(None),
            feedback: Set(None),
            graded_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 评分
    ///
    /// 按 (assignment_id, submission_id) 定位提交行；找不到时返回 None，
    /// 不触碰任何其它提交。
    pub async fn grade_submission_impl(
        &self,
        assignment_id: i64,
        submission_id: i64,
        score: Option<i32>,
        feedback: Option<String>,
    ) -> Result<Option<AssignmentSubmission>> {
        let row = AssignmentSubmissions::find()
            .filter(assignment_submissions::Column::Id.eq(submission_id))
            .filter(assignment_submissions::Column::AssignmentId.eq(assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询提交失败: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut active: assignment_submissions::ActiveModel = row.into();
        active.score = Set(score);
        active.feedback = Set(feedback);
        active.graded_at = Set(Some(chrono::Utc::now().timestamp()));

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("更新评分失败: {e}")))?;

        Ok(Some(updated.into_submission()))
    }

    /// 管理端：全部作业提交（附作业/课程/学生信息），按提交时间倒序
    pub async fn list_all_submissions_impl(&self) -> Result<Vec<AdminSubmissionItem>> {
        let rows = AssignmentSubmissions::find()
            .order_by_desc(assignment_submissions::Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询提交列表失败: {e}")))?;

        let assignment_ids: Vec<i64> = rows.iter().map(|s| s.assignment_id).collect();
        let student_ids: Vec<i64> = rows.iter().map(|s| s.student_id).collect();

        let assignments_by_id: HashMap<i64, assignments::Model> = Assignments::find()
            .filter(assignments::Column::Id.is_in(assignment_ids))
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询作业失败: {e}")))?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let course_ids: Vec<i64> = assignments_by_id.values().map(|a| a.course_id).collect();
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
            .map(|submission| {
                let assignment = assignments_by_id.get(&submission.assignment_id);
                let assignment_title = assignment
                    .map(|a| a.title.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                let course_title = assignment
                    .and_then(|a| course_titles.get(&a.course_id).cloned())
                    .unwrap_or_else(|| "Unknown".to_string());
                let (student_name, student_email) = students
                    .get(&submission.student_id)
                    .map(|u| (u.name.clone(), u.email.clone()))
                    .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

                AdminSubmissionItem {
                    submission: submission.into_submission(),
                    assignment_title,
                    course_title,
                    student_name,
                    student_email,
                }
            })
            .collect();

        Ok(items)
    }

    /// 作业总数
    pub async fn count_assignments_impl(&self) -> Result<u64> {
        Assignments::find()
            .count(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("统计作业数失败: {e}")))
    }
}
