use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::dto::{CommentRequest, CreatePostRequest, LikeResponse, PostListParams, PostWithAuthor};
use crate::entities::comment;
use crate::extractor::AuthClaims;
use crate::gamification::actions::ActionType;
use crate::gamification::ledger::award_points;
use crate::repositories::{PostRepository, UserRepository};

pub fn create_route() -> Router {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts", post(create_post))
        .route("/posts/{post_id}/like", post(like_post))
        .route("/posts/{post_id}/comment", post(create_comment))
}

#[utoipa::path(
    get,
    path = "/posts",
    params(PostListParams),
    responses((status = 200, description = "Recent posts", body = [PostWithAuthor])),
    tag = "Community"
)]
pub async fn list_posts(
    Query(params): Query<PostListParams>,
) -> Result<(StatusCode, Json<Vec<PostWithAuthor>>), (StatusCode, String)> {
    let posts = PostRepository::new()
        .find_recent(params.category, params.limit)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let result = posts
        .into_iter()
        .map(|(post, author)| PostWithAuthor { post, author })
        .collect();
    Ok((StatusCode::OK, Json(result)))
}

/// Creating a post earns points; the post and the award commit together.
#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostWithAuthor),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Community"
)]
pub async fn create_post(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostWithAuthor>), (StatusCode, String)> {
    let post_repo = PostRepository::new();
    let db = post_repo.get_connection();
    let now = chrono::Utc::now().naive_utc();

    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let post = PostRepository::insert(
        &txn,
        claims.user_id,
        payload.title,
        payload.content,
        payload.category,
        now,
    )
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    award_points(
        &txn,
        claims.user_id,
        ActionType::CreatePost,
        Some("Created community post".to_string()),
        now,
    )
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    txn.commit().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    let author = UserRepository::new()
        .find_by_id(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((StatusCode::CREATED, Json(PostWithAuthor { post, author })))
}

/// Liking bumps the post's counter and pays the liker a point.
#[utoipa::path(
    post,
    path = "/posts/{post_id}/like",
    params(("post_id" = Uuid, Path, description = "Post to like")),
    responses(
        (status = 200, description = "Like recorded", body = LikeResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Post not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Community"
)]
pub async fn like_post(
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<Uuid>,
) -> Result<(StatusCode, Json<LikeResponse>), (StatusCode, String)> {
    let post_repo = PostRepository::new();
    let db = post_repo.get_connection();
    let now = chrono::Utc::now().naive_utc();

    let post = post_repo
        .find_by_id(post_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Post not found".to_string()))?;

    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let updated = PostRepository::increment_likes(&txn, post).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    award_points(&txn, claims.user_id, ActionType::LikePost, None, now)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    txn.commit().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok((
        StatusCode::OK,
        Json(LikeResponse {
            likes: updated.likes_count,
        }),
    ))
}

/// Commenting earns points; comment and award commit together.
#[utoipa::path(
    post,
    path = "/posts/{post_id}/comment",
    params(("post_id" = Uuid, Path, description = "Post to comment on")),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created", body = comment::Model),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Post not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Community"
)]
pub async fn create_comment(
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<Uuid>,
    Json(payload): Json<CommentRequest>,
) -> Result<(StatusCode, Json<comment::Model>), (StatusCode, String)> {
    let post_repo = PostRepository::new();
    let db = post_repo.get_connection();
    let now = chrono::Utc::now().naive_utc();

    post_repo
        .find_by_id(post_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Post not found".to_string()))?;

    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let comment = PostRepository::insert_comment(&txn, post_id, claims.user_id, payload.content, now)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    award_points(&txn, claims.user_id, ActionType::Comment, None, now)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;
    txn.commit().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;

    Ok((StatusCode::CREATED, Json(comment)))
}
