use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    #[schema(example = "CS101")]
    pub code: String,

    #[schema(example = "Introduction to Computer Science")]
    pub title: String,

    pub sprint_number: Option<i32>,
    pub academic_year: Option<String>,
    pub start_date: Option<chrono::NaiveDateTime>,
    pub end_date: Option<chrono::NaiveDateTime>,
}
