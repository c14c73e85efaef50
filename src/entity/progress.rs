//! 学习进度实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub lessons_completed: i32,
    pub total_lessons: i32,
    pub percentage: i32,
    // JSON 编码的课时标识数组，语义上是集合，去重由更新流程保证
    #[sea_orm(column_type = "Text")]
    pub completed_lesson_ids: String,
    pub completed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_progress(self) -> crate::models::progress::entities::Progress {
        use chrono::{DateTime, Utc};

        let completed_lesson_ids: Vec<String> =
            serde_json::from_str(&self.completed_lesson_ids).unwrap_or_default();

        crate::models::progress::entities::Progress {
            id: self.id,
            student_id: self.student_id,
            course_id: self.course_id,
            lessons_completed: self.lessons_completed,
            total_lessons: self.total_lessons,
            percentage: self.percentage,
            completed_lesson_ids,
            completed_at: self
                .completed_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
