use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfileRequest {
    pub full_name: Option<String>,
    pub nationality: Option<String>,
    pub native_language: Option<String>,
    pub program: Option<String>,
    pub year: Option<i32>,
    pub bio: Option<String>,
    /// Free-form list of interest tags.
    pub interests: Option<Value>,
    /// Free-form study preference object.
    pub study_preferences: Option<Value>,
    pub avatar_emoji: Option<String>,
}
