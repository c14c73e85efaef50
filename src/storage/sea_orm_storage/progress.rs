use super::SeaOrmStorage;
use crate::entity::prelude::Progress as ProgressEntity;
use crate::entity::progress;
use crate::errors::{LMSystemError, Result};
use crate::models::progress::entities::Progress;
use crate::utils::scoring::progress_percentage;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 查询进度记录
    pub async fn get_progress_by_student_and_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Progress>> {
        let result = ProgressEntity::find()
            .filter(progress::Column::StudentId.eq(student_id))
            .filter(progress::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询进度失败: {e}")))?;

        Ok(result.map(|m| m.into_progress()))
    }

    /// 标记课时完成
    ///
    /// 重复标记同一课时为幂等空操作，原样返回当前记录。百分比首次到达
    /// 100 时写入 completed_at，此后不再变更。进度记录不存在时返回 None，
    /// 由服务层映射为 NotFound（报名流程负责创建记录，这里不自动补建）。
    pub async fn complete_lesson_impl(
        &self,
        student_id: i64,
        course_id: i64,
        lesson_id: &str,
    ) -> Result<Option<Progress>> {
        let row = ProgressEntity::find()
            .filter(progress::Column::StudentId.eq(student_id))
            .filter(progress::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询进度失败: {e}")))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut completed: Vec<String> = serde_json::from_str(&row.completed_lesson_ids)?;
        if completed.iter().any(|id| id == lesson_id) {
            return Ok(Some(row.into_progress()));
        }

        completed.push(lesson_id.to_string());
        let lessons_completed = completed.len() as i32;
        let percentage = progress_percentage(lessons_completed, row.total_lessons);
        let now = chrono::Utc::now().timestamp();

        let completed_at = row.completed_at;
        let mut active: progress::ActiveModel = row.into();
        active.completed_lesson_ids = Set(serde_json::to_string(&completed)?);
        active.lessons_completed = Set(lessons_completed);
        active.percentage = Set(percentage);
        active.updated_at = Set(now);
        if percentage == 100 && completed_at.is_none() {
            active.completed_at = Set(Some(now));
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("更新进度失败: {e}")))?;

        Ok(Some(updated.into_progress()))
    }
}
