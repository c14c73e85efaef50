//! 课时实体（课程大纲的有序条目）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    // 稳定的课时标识，进度与作业/测验通过它引用课时
    pub lesson_id: String,
    pub title: String,
    pub duration_minutes: i32,
    pub video_url: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_lesson(self) -> crate::models::courses::entities::Lesson {
        crate::models::courses::entities::Lesson {
            lesson_id: self.lesson_id,
            title: self.title,
            duration_minutes: self.duration_minutes,
            video_url: self.video_url,
            description: self.description,
        }
    }
}
