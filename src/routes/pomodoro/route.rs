use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::dto::{
    ActivePomodoroResponse, CompletePomodoroResponse, PomodoroStats, StartPomodoroRequest,
};
use crate::entities::pomodoro_session;
use crate::extractor::AuthClaims;
use crate::gamification::actions::ActionType;
use crate::gamification::ledger::award_points;
use crate::repositories::PomodoroRepository;

pub fn create_route() -> Router {
    Router::new()
        .route("/pomodoro/start", post(start_session))
        .route("/pomodoro/{session_id}/complete", post(complete_session))
        .route("/pomodoro/stats", get(session_stats))
        .route("/pomodoro/active", get(active_session))
}

#[utoipa::path(
    post,
    path = "/pomodoro/start",
    request_body = StartPomodoroRequest,
    responses(
        (status = 201, description = "Session started", body = pomodoro_session::Model),
        (status = 400, description = "Invalid duration"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Pomodoro"
)]
pub async fn start_session(
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<StartPomodoroRequest>,
) -> Result<(StatusCode, Json<pomodoro_session::Model>), (StatusCode, String)> {
    if payload.duration_minutes <= 0 || payload.break_minutes < 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "duration_minutes must be positive".to_string(),
        ));
    }

    let now = chrono::Utc::now().naive_utc();
    let session = PomodoroRepository::new()
        .create(
            claims.user_id,
            payload.circle_id,
            payload.duration_minutes,
            payload.break_minutes,
            payload.is_group_session,
            now,
        )
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((StatusCode::CREATED, Json(session)))
}

/// Completing a session pays points; the completion and the award commit
/// together. Completing twice is rejected.
#[utoipa::path(
    post,
    path = "/pomodoro/{session_id}/complete",
    params(("session_id" = Uuid, Path, description = "Session to complete")),
    responses(
        (status = 200, description = "Session completed", body = CompletePomodoroResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session already completed")
    ),
    security(("bearer_auth" = [])),
    tag = "Pomodoro"
)]
pub async fn complete_session(
    AuthClaims(claims): AuthClaims,
    Path(session_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CompletePomodoroResponse>), (StatusCode, String)> {
    let pomodoro_repo = PomodoroRepository::new();
    let db = pomodoro_repo.get_connection();
    let now = chrono::Utc::now().naive_utc();

    let session = pomodoro_repo
        .find_owned(session_id, claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "Session not found".to_string()))?;

    if session.completed {
        return Err((
            StatusCode::CONFLICT,
            "Session already completed".to_string(),
        ));
    }

    let duration = session.duration_minutes;
    let txn = db.begin().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    let updated = PomodoroRepository::mark_completed(&txn, session, now)
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
        ActionType::PomodoroComplete,
        Some(format!("Completed {} min Pomodoro", duration)),
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

    Ok((
        StatusCode::OK,
        Json(CompletePomodoroResponse {
            message: "Pomodoro completed!".to_string(),
            session: updated,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/pomodoro/stats",
    responses(
        (status = 200, description = "Completed-session statistics", body = PomodoroStats),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Pomodoro"
)]
pub async fn session_stats(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<PomodoroStats>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let sessions = PomodoroRepository::new()
        .find_completed(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let today = now.date();
    let completed_today = sessions
        .iter()
        .filter(|s| s.ended_at.map(|t| t.date()) == Some(today))
        .count();

    let total_sessions = sessions.len();
    let total_minutes: i64 = sessions.iter().map(|s| i64::from(s.duration_minutes)).sum();

    let average_per_day = match sessions.iter().map(|s| s.started_at).min() {
        Some(first) => {
            let days_active = (now - first).num_days() + 1;
            if days_active > 0 {
                total_sessions as f64 / days_active as f64
            } else {
                0.0
            }
        }
        None => 0.0,
    };

    Ok((
        StatusCode::OK,
        Json(PomodoroStats {
            total_sessions,
            total_minutes,
            total_hours: total_minutes as f64 / 60.0,
            completed_today,
            average_per_day,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/pomodoro/active",
    responses(
        (status = 200, description = "Current session, if any", body = ActivePomodoroResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = [])),
    tag = "Pomodoro"
)]
pub async fn active_session(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<ActivePomodoroResponse>), (StatusCode, String)> {
    let now = chrono::Utc::now().naive_utc();
    let active = PomodoroRepository::new()
        .find_active(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    let response = match active {
        None => ActivePomodoroResponse {
            active: false,
            session: None,
            elapsed_minutes: None,
            remaining_minutes: None,
        },
        Some(session) => {
            let elapsed = (now - session.started_at).num_seconds() as f64 / 60.0;
            let remaining = (f64::from(session.duration_minutes) - elapsed).max(0.0);
            ActivePomodoroResponse {
                active: true,
                session: Some(session),
                elapsed_minutes: Some(elapsed),
                remaining_minutes: Some(remaining),
            }
        }
    };

    Ok((StatusCode::OK, Json(response)))
}
