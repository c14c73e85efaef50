//! 预导入模块，方便使用

pub use super::assignment_submissions::{
    ActiveModel as AssignmentSubmissionActiveModel, Entity as AssignmentSubmissions,
    Model as AssignmentSubmissionModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::batches::{ActiveModel as BatchActiveModel, Entity as Batches, Model as BatchModel};
pub use super::courses::{
    ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel,
};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::lessons::{
    ActiveModel as LessonActiveModel, Entity as Lessons, Model as LessonModel,
};
pub use super::progress::{
    ActiveModel as ProgressActiveModel, Entity as Progress, Model as ProgressModel,
};
pub use super::quiz_attempts::{
    ActiveModel as QuizAttemptActiveModel, Entity as QuizAttempts, Model as QuizAttemptModel,
};
pub use super::quiz_questions::{
    ActiveModel as QuizQuestionActiveModel, Entity as QuizQuestions, Model as QuizQuestionModel,
};
pub use super::quizzes::{ActiveModel as QuizActiveModel, Entity as Quizzes, Model as QuizModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
