use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::CreateCourseRequest;
use crate::entities::course;
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::extractor::AuthClaims;
use crate::repositories::CourseRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses", post(create_course))
}

#[utoipa::path(
    get,
    path = "/courses",
    responses((status = 200, description = "All courses", body = [course::Model])),
    tag = "Courses"
)]
pub async fn list_courses() -> Result<(StatusCode, Json<Vec<course::Model>>), (StatusCode, String)>
{
    let courses = CourseRepository::new().find_all().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    Ok((StatusCode::OK, Json(courses)))
}

/// Admin only.
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = course::Model),
        (status = 403, description = "Not an admin"),
        (status = 500, description = "Internal server error")
    ),
    security(("bearer_auth" = [])),
    tag = "Courses"
)]
pub async fn create_course(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<(StatusCode, Json<course::Model>), (StatusCode, String)> {
    if claims.role != RoleEnum::Admin {
        return Err((StatusCode::FORBIDDEN, "Admin access required".to_string()));
    }

    let course = CourseRepository::new()
        .create(
            payload.code,
            payload.title,
            payload.sprint_number,
            payload.academic_year,
            payload.start_date,
            payload.end_date,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((StatusCode::CREATED, Json(course)))
}
