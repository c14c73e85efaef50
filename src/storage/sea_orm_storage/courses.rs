use super::SeaOrmStorage;
use crate::entity::prelude::{Batches, Courses, Lessons};
use crate::entity::{batches, courses, lessons};
use crate::errors::{LMSystemError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::{BatchInput, CourseListQuery, CreateCourseRequest, LessonInput,
            UpdateCourseRequest},
        responses::CourseListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 组装课时行，缺省 lesson_id 时生成 uuid
fn lesson_rows(course_id: i64, inputs: Vec<LessonInput>) -> Vec<lessons::ActiveModel> {
    inputs
        .into_iter()
        .enumerate()
        .map(|(position, input)| lessons::ActiveModel {
            course_id: Set(course_id),
            lesson_id: Set(input
                .lesson_id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())),
            title: Set(input.title),
            duration_minutes: Set(input.duration_minutes),
            video_url: Set(input.video_url),
            description: Set(input.description),
            position: Set(position as i32),
            ..Default::default()
        })
        .collect()
}

/// 组装批次行，缺省 batch_id 时生成 uuid
fn batch_rows(course_id: i64, inputs: Vec<BatchInput>) -> Vec<batches::ActiveModel> {
    inputs
        .into_iter()
        .map(|input| batches::ActiveModel {
            course_id: Set(course_id),
            batch_id: Set(input
                .batch_id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())),
            start_date: Set(input.start_date.timestamp()),
            end_date: Set(input.end_date.timestamp()),
            capacity: Set(input.capacity),
            enrolled_count: Set(0),
            ..Default::default()
        })
        .collect()
}

impl SeaOrmStorage {
    /// 创建课程（课程、大纲、批次在同一事务内写入）
    pub async fn create_course_impl(
        &self,
        instructor_id: i64,
        req: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let tags = serde_json::to_string(&req.tags.unwrap_or_default())?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let course = courses::ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            instructor_id: Set(instructor_id),
            price: Set(req.price),
            category: Set(req.category),
            tags: Set(tags),
            enrollment_count: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| LMSystemError::database_operation(format!("创建课程失败: {e}")))?;

        let lesson_models = lesson_rows(course.id, req.syllabus.unwrap_or_default());
        if !lesson_models.is_empty() {
            Lessons::insert_many(lesson_models)
                .exec(&txn)
                .await
                .map_err(|e| LMSystemError::database_operation(format!("写入大纲失败: {e}")))?;
        }

        let batch_models = batch_rows(course.id, req.batches.unwrap_or_default());
        if !batch_models.is_empty() {
            Batches::insert_many(batch_models)
                .exec(&txn)
                .await
                .map_err(|e| LMSystemError::database_operation(format!("写入批次失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_course_by_id_impl(course.id)
            .await?
            .ok_or_else(|| LMSystemError::database_operation("课程创建后读取失败"))
    }

    /// 通过 ID 获取课程详情（含大纲与批次）
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let course = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程失败: {e}")))?;

        let Some(course) = course else {
            return Ok(None);
        };

        let lessons = self.load_course_lessons(&self.db, course_id).await?;

        let batches = Batches::find()
            .filter(batches::Column::CourseId.eq(course_id))
            .order_by_asc(batches::Column::StartDate)
            .all(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询批次失败: {e}")))?;

        Ok(Some(course.into_course(lessons, batches)))
    }

    /// 分页列出课程（列表视图不含大纲与批次）
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 标题/描述搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(courses::Column::Title.contains(&escaped))
                    .add(courses::Column::Description.contains(&escaped)),
            );
        }

        // 分类筛选
        if let Some(ref category) = query.category {
            select = select.filter(courses::Column::Category.eq(category));
        }

        // 标签筛选：逗号分隔，命中任一即可
        if let Some(ref tags) = query.tags {
            let mut condition = Condition::any();
            for tag in tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                // tags 列为 JSON 数组文本，按带引号的字面量匹配
                condition = condition
                    .add(courses::Column::Tags.contains(format!("\"{}\"", escape_like_pattern(tag))));
            }
            select = select.filter(condition);
        }

        // 排序
        select = match query.sort.as_deref() {
            Some("price_asc") => select.order_by_asc(courses::Column::Price),
            Some("price_desc") => select.order_by_desc(courses::Column::Price),
            _ => select.order_by_desc(courses::Column::CreatedAt),
        };

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_summary()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课程，提供 syllabus/batches 时整体替换
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询课程失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let mut active: courses::ActiveModel = existing.into();
        if let Some(title) = update.title {
            active.title = Set(title);
        }
        if let Some(description) = update.description {
            active.description = Set(description);
        }
        if let Some(price) = update.price {
            active.price = Set(price);
        }
        if let Some(category) = update.category {
            active.category = Set(category);
        }
        if let Some(tags) = update.tags {
            active.tags = Set(serde_json::to_string(&tags)?);
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        active
            .update(&txn)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("更新课程失败: {e}")))?;

        // 大纲整体替换；已有进度记录中的课时标识不跟随变化
        if let Some(syllabus) = update.syllabus {
            Lessons::delete_many()
                .filter(lessons::Column::CourseId.eq(course_id))
                .exec(&txn)
                .await
                .map_err(|e| LMSystemError::database_operation(format!("清除大纲失败: {e}")))?;

            let lesson_models = lesson_rows(course_id, syllabus);
            if !lesson_models.is_empty() {
                Lessons::insert_many(lesson_models)
                    .exec(&txn)
                    .await
                    .map_err(|e| LMSystemError::database_operation(format!("写入大纲失败: {e}")))?;
            }
        }

        if let Some(batch_inputs) = update.batches {
            Batches::delete_many()
                .filter(batches::Column::CourseId.eq(course_id))
                .exec(&txn)
                .await
                .map_err(|e| LMSystemError::database_operation(format!("清除批次失败: {e}")))?;

            let batch_models = batch_rows(course_id, batch_inputs);
            if !batch_models.is_empty() {
                Batches::insert_many(batch_models)
                    .exec(&txn)
                    .await
                    .map_err(|e| LMSystemError::database_operation(format!("写入批次失败: {e}")))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| LMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_course_by_id_impl(course_id).await
    }

    /// 删除课程（子表级联删除）
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程总数
    pub async fn count_courses_impl(&self) -> Result<u64> {
        Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("统计课程数失败: {e}")))
    }

    /// 按 position 加载课程大纲
    pub(crate) async fn load_course_lessons<C: ConnectionTrait>(
        &self,
        conn: &C,
        course_id: i64,
    ) -> Result<Vec<lessons::Model>> {
        Lessons::find()
            .filter(lessons::Column::CourseId.eq(course_id))
            .order_by_asc(lessons::Column::Position)
            .all(conn)
            .await
            .map_err(|e| LMSystemError::database_operation(format!("查询大纲失败: {e}")))
    }
}
