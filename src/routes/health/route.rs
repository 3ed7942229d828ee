use axum::{Json, Router, http::StatusCode, routing::get};
use sea_orm::{ConnectionTrait, Statement};

use super::dto::{HealthResponse, RootResponse};
use crate::static_service::DATABASE_CONNECTION;

pub fn create_route() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = RootResponse)),
    tag = "Health"
)]
pub async fn root() -> (StatusCode, Json<RootResponse>) {
    (
        StatusCode::OK,
        Json(RootResponse {
            message: "Sprint Connect API is running!".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            docs: "/swagger-ui".to_string(),
            features: vec![
                "Gamification System".to_string(),
                "Pomodoro Timer".to_string(),
                "Video Chat (Jitsi)".to_string(),
                "Stress Analysis".to_string(),
                "Notifications".to_string(),
            ],
        }),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable")
    ),
    tag = "Health"
)]
pub async fn health() -> Result<(StatusCode, Json<HealthResponse>), (StatusCode, String)> {
    let db = DATABASE_CONNECTION
        .get()
        .ok_or_else(|| (StatusCode::SERVICE_UNAVAILABLE, "Database not initialized".to_string()))?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1".to_string(),
    ))
    .await
    .map_err(|e| (StatusCode::SERVICE_UNAVAILABLE, format!("Database error: {}", e)))?;

    Ok((
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().naive_utc(),
            database: "connected".to_string(),
        }),
    ))
}
