use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{Courses, Enrollments, Lessons, Progress as ProgressEntity, Users};
use crate::entity::{courses, enrollments, lessons, progress, users};
use crate::errors::{LMSystemError, Result};
use crate::models::enrollments::{
    entities::{Enrollment, EnrollmentStatus},
    responses::{AdminEnrollmentItem, StudentCourseItem},
};
use crate::models::progress::entities::Progress;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 查询学生在某课程的报名记录
    pub async fn get_enrollment_by_student_and_course_impl(
        &self,
        student_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .filter(enrollments::Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询报名记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 报名
    ///
    /// 同一事务内：创建报名记录、按当前大纲长度创建初始进度记录、累加课程
    /// 报名数。(course, student) 唯一索引冲突映射为 Conflict 错误，事务回滚。
    pub async fn enroll_student_impl(
        &self,
        student_id: i64,
        course_id: i64,
        batch_id: &str,
    ) -> Result<(Enrollment, Progress)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        // 课程必须存在，顺带拿到报名计数
        let course = Courses::find_by_id(course_id)
            .one(&txn)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程失败: {e}")))?
            .ok_or_else(|| LMSystemError::not_found(format!("课程 {course_id} 不存在")))?;

        // 初始进度的 total_lessons 取报名时刻的大纲长度
        let total_lessons = Lessons::find()
            .filter(lessons::Column::CourseId.eq(course_id))
            .count(&txn)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("统计课时数失败: {e}")))?
            as i32;

        let enrollment = enrollments::ActiveModel {
            course_id: Set(course_id),
            student_id: Set(student_id),
            batch_id: Set(batch_id.to_string()),
            status: Set(EnrollmentStatus::Active.to_string()),
            enrolled_at: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            let err = LMSystemError::from(e);
            if err.is_conflict() {
                LMSystemError::conflict("Already enrolled in this course")
            } else {
                LMSystemError::database_operation(format!("创建报名记录失败: {}", err.message()))
            }
        })?;

        let progress_row = progress::ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            lessons_completed: Set(0),
            total_lessons: Set(total_lessons),
            percentage: Set(0),
            completed_lesson_ids: Set("[]".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            let err = LMSystemError::from(e);
            if err.is_conflict() {
                LMSystemError::conflict("Progress record already exists for this course")
            } else {
                LMSystemError::database_operation(format!("创建进度记录失败: {}", err.message()))
            }
        })?;

        let enrollment_count = course.enrollment_count;
        let mut course_active: courses::ActiveModel = course.into();
        course_active.enrollment_count = Set(enrollment_count + 1);
        course_active
            .update(&txn)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("更新报名计数失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((enrollment.into_enrollment(), progress_row.into_progress()))
    }

    /// 学生已报名课程列表（报名 + 课程摘要 + 进度）
    pub async fn list_student_courses_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<StudentCourseItem>> {
        let rows = Enrollments::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .find_also_related(Courses)
            .order_by_desc(enrollments::Column::EnrolledAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询报名列表失败: {e}")))?;

        let progress_rows = ProgressEntity::find()
            .filter(progress::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询进度失败: {e}")))?;

        let mut progress_by_course: HashMap<i64, progress::Model> = progress_rows
            .into_iter()
            .map(|p| (p.course_id, p))
            .collect();

        let items = rows
            .into_iter()
            .filter_map(|(enrollment, course)| {
                // 课程被删除后报名记录会级联清除，这里仅作防御性过滤
                let course = course?;
                let progress = progress_by_course
                    .remove(&enrollment.course_id)
                    .map(|p| p.into_progress());
                Some(StudentCourseItem {
                    enrollment: enrollment.into_enrollment(),
                    course: course.into_summary(),
                    progress,
                })
            })
            .collect();

        Ok(items)
    }

    /// 管理端：全部报名记录（附课程与学生信息），按创建时间倒序
    pub async fn list_all_enrollments_impl(&self) -> Result<Vec<AdminEnrollmentItem>> {
        let rows = Enrollments::find()
            .order_by_desc(enrollments::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询报名列表失败: {e}")))?;

        let course_ids: Vec<i64> = rows.iter().map(|e| e.course_id).collect();
        let student_ids: Vec<i64> = rows.iter().map(|e| e.student_id).collect();

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
            .map(|enrollment| {
                let course_title = course_titles
                    .get(&enrollment.course_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string());
                let (student_name, student_email) = students
                    .get(&enrollment.student_id)
                    .map(|u| (u.name.clone(), u.email.clone()))
                    .unwrap_or_else(|| ("Unknown".to_string(), "Unknown".to_string()));

                AdminEnrollmentItem {
                    enrollment: enrollment.into_enrollment(),
                    course_title,
                    student_name,
                    student_email,
                }
            })
            .collect();

        Ok(items)
    }

    /// 报名总数
    pub async fn count_enrollments_impl(&self) -> Result<u64> {
        Enrollments::find()
            .count(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("统计报名数失败: {e}")))
    }
}
