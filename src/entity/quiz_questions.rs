//! 测验题目实体（选项以 JSON 存储）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    pub position: i32,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    // JSON 编码的 QuestionOption 数组
    #[sea_orm(column_type = "Text")]
    pub options: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::quizzes::Entity",
        from = "Column::QuizId",
        to = "super::quizzes::Column::Id"
    )]
    Quiz,
}

impl Related<super::quizzes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Quiz.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::quizzes::entities::Question {
        let options: Vec<crate::models::quizzes::entities::QuestionOption> =
            serde_json::from_str(&self.options).unwrap_or_default();

        crate::models::quizzes::entities::Question {
            question_text: self.question_text,
            options,
            explanation: self.explanation,
        }
    }
}
