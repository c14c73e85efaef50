use serde::Deserialize;
use ts_rs::TS;

/// 课时输入，缺省 lesson_id 时由服务端生成
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct LessonInput {
    pub lesson_id: Option<String>,
    pub title: String,
    pub duration_minutes: i32,
    pub video_url: String,
    pub description: String,
}

/// 批次输入，缺省 batch_id 时由服务端生成
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct BatchInput {
    pub batch_id: Option<String>,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
    pub capacity: i32,
}

// 课程创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub syllabus: Option<Vec<LessonInput>>,
    #[serde(default)]
    pub batches: Option<Vec<BatchInput>>,
}

// 课程更新请求（整体替换大纲/批次，未提供的字段保持不变）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub syllabus: Option<Vec<LessonInput>>,
    pub batches: Option<Vec<BatchInput>>,
}

// 课程列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
    // 逗号分隔的标签列表
    pub tags: Option<String>,
    // newest | price_asc | price_desc
    pub sort: Option<String>,
}

// 课时素材查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct LessonMaterialsQuery {
    pub course_id: i64,
    pub lesson_id: String,
}
