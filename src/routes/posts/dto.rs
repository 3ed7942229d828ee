use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entities::{community_post, user};

fn default_limit() -> u64 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PostListParams {
    pub category: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[schema(example = "study-tips")]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: community_post::Model,
    pub author: Option<user::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub likes: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub content: String,
}
