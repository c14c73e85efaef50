//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub instructor_id: i64,
    pub price: f64,
    pub category: String,
    // JSON 编码的字符串数组
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub enrollment_count: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::InstructorId",
        to = "super::users::Column::Id"
    )]
    Instructor,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
    #[sea_orm(has_many = "super::batches::Entity")]
    Batches,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::progress::Entity")]
    Progress,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
    #[sea_orm(has_many = "super::quizzes::Entity")]
    Quizzes,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::batches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Progress.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quizzes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    /// 课程详情（包含大纲与批次）
    pub fn into_course(
        self,
        lessons: Vec<super::lessons::Model>,
        batches: Vec<super::batches::Model>,
    ) -> crate::models::courses::entities::Course {
        use crate::models::courses::entities::Course;
        use chrono::{DateTime, Utc};

        let tags: Vec<String> = serde_json::from_str(&self.tags).unwrap_or_default();

        Course {
            id: self.id,
            title: self.title,
            description: self.description,
            instructor_id: self.instructor_id,
            price: self.price,
            category: self.category,
            tags,
            syllabus: lessons.into_iter().map(|l| l.into_lesson()).collect(),
            batches: batches.into_iter().map(|b| b.into_batch()).collect(),
            enrollment_count: self.enrollment_count,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }

    /// 课程摘要（列表视图，不含大纲与批次）
    pub fn into_summary(self) -> crate::models::courses::entities::CourseSummary {
        use crate::models::courses::entities::CourseSummary;
        use chrono::{DateTime, Utc};

        let tags: Vec<String> = serde_json::from_str(&self.tags).unwrap_or_default();

        CourseSummary {
            id: self.id,
            title: self.title,
            description: self.description,
            instructor_id: self.instructor_id,
            price: self.price,
            category: self.category,
            tags,
            enrollment_count: self.enrollment_count,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
