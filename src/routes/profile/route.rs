use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use super::dto::ProfileRequest;
use crate::entities::student_profile;
use crate::extractor::AuthClaims;
use crate::repositories::{ProfileRepository, ProfileUpdate};

pub fn create_route() -> Router {
    Router::new()
        .route("/profile", post(upsert_profile))
        .route("/profile/{user_id}", get(get_profile))
}

/// Create or update the caller's student profile.
#[utoipa::path(
    post,
    path = "/profile",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = student_profile::Model),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Profile"
)]
pub async fn upsert_profile(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<student_profile::Model>), (StatusCode, String)> {
    let updates = ProfileUpdate {
        full_name: payload.full_name,
        nationality: payload.nationality,
        native_language: payload.native_language,
        program: payload.program,
        year: payload.year,
        bio: payload.bio,
        interests: payload.interests,
        study_preferences: payload.study_preferences,
        avatar_emoji: payload.avatar_emoji,
    };

    let profile = ProfileRepository::new()
        .upsert(claims.user_id, updates)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    get,
    path = "/profile/{user_id}",
    params(("user_id" = Uuid, Path, description = "User to look up")),
    responses(
        (status = 200, description = "Profile found", body = student_profile::Model),
        (status = 404, description = "Profile not found")
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    Path(user_id): Path<Uuid>,
) -> Result<(StatusCode, Json<student_profile::Model>), (StatusCode, String)> {
    let profile = ProfileRepository::new()
        .find_by_user(user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Profile not found".to_string()))?;

    Ok((StatusCode::OK, Json(profile)))
}
