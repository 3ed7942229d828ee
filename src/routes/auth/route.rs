use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};

use super::dto::{MeResponse, RegisterRequest, TokenRequest, TokenResponse};
use crate::auth_token::JwtManager;
use crate::config::{APP_CONFIG, JWT_EXPIRED_TIME};
use crate::entities::sea_orm_active_enums::RoleEnum;
use crate::entities::user;
use crate::extractor::AuthClaims;
use crate::repositories::{ProfileRepository, UserRepository};

pub fn create_route() -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/token", post(token))
        .route("/me", get(me))
}

/// Register a new account. Students also get an empty profile.
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = user::Model),
        (status = 400, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn register(
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<user::Model>), (StatusCode, String)> {
    let user_repo = UserRepository::new();

    let existing = user_repo.find_by_email(&payload.email).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {}", e),
        )
    })?;
    if existing.is_some() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Email already registered".to_string(),
        ));
    }

    let username = payload
        .username
        .unwrap_or_else(|| payload.email.split('@').next().unwrap_or_default().to_string());
    let role = payload.role.unwrap_or(RoleEnum::Student);

    let password_hash = bcrypt::hash(&payload.password, bcrypt::DEFAULT_COST).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Password hashing error: {}", e),
        )
    })?;

    let user = user_repo
        .create(payload.email, username.clone(), password_hash, role)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    if user.role == RoleEnum::Student {
        let student_code = format!(
            "SRH{}",
            &user.user_id.simple().to_string()[..6].to_uppercase()
        );
        ProfileRepository::new()
            .create_default(user.user_id, username, Some(student_code))
            .await
            .map_err(|e| {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {}", e),
                )
            })?;
    }

    Ok((StatusCode::CREATED, Json(user)))
}

/// Exchange credentials for a bearer token.
#[utoipa::path(
    post,
    path = "/token",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Incorrect email or password"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Authentication"
)]
pub async fn token(
    Json(payload): Json<TokenRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), (StatusCode, String)> {
    let user_repo = UserRepository::new();

    let user = user_repo
        .find_by_email(&payload.email)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                "Incorrect email or password".to_string(),
            )
        })?;

    let password_valid = bcrypt::verify(&payload.password, &user.password).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Password verification error: {}", e),
        )
    })?;
    if !password_valid || !user.is_active {
        return Err((
            StatusCode::UNAUTHORIZED,
            "Incorrect email or password".to_string(),
        ));
    }

    let jwt_manager = JwtManager::new(APP_CONFIG.jwt_secret.clone());
    let access_token = jwt_manager
        .create_jwt(
            &user.email,
            user.user_id,
            &user.username,
            user.role.clone(),
            JWT_EXPIRED_TIME,
        )
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Token creation error: {}", e),
            )
        })?;

    Ok((
        StatusCode::OK,
        Json(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
            expires_in: JWT_EXPIRED_TIME,
            user,
        }),
    ))
}

/// Current user with their student profile, if any.
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current user", body = MeResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "User no longer exists")
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
pub async fn me(
    AuthClaims(claims): AuthClaims,
) -> Result<(StatusCode, Json<MeResponse>), (StatusCode, String)> {
    let user = UserRepository::new()
        .find_by_id(claims.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?
        .ok_or_else(|| (StatusCode::NOT_FOUND, "User not found".to_string()))?;

    let profile = ProfileRepository::new()
        .find_by_user(user.user_id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", e),
            )
        })?;

    Ok((StatusCode::OK, Json(MeResponse { user, profile })))
}
