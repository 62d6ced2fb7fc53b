//! Authentication endpoints: register, login, me

use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::user::UserSummary;

use crate::auth::user_auth::UserIdentity;
use crate::db;
use crate::state::AppState;
use crate::util::{hash_password, verify_password};

use super::ApiResult;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// POST /api/auth/register
///
/// Always creates a `user`-role account. There is no self-service elevation;
/// admin roles are granted out of band.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<serde_json::Value> {
    let username = req.username.trim().to_string();
    if username.is_empty() || req.password.is_empty() {
        return Err(AppError::validation("Username and password are required"));
    }
    if req.password.len() < 8 {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    let existing = db::users::find_by_username(&state.pool, &username)
        .await
        .map_err(|e| {
            tracing::error!("DB error during registration: {e}");
            AppError::new(ErrorCode::InternalError)
        })?;
    if existing.is_some() {
        return Err(AppError::new(ErrorCode::UsernameExists));
    }

    let hashed =
        hash_password(&req.password).map_err(|_| AppError::new(ErrorCode::InternalError))?;
    let user = db::users::create_user(&state.pool, &username, &hashed)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {e}");
            AppError::new(ErrorCode::InternalError)
        })?;

    tracing::info!(user_id = user.id, "User registered");

    Ok(Json(serde_json::json!({
        "message": "Registration successful",
        "user": UserSummary::from(&user),
    })))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(serde::Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let username = req.username.trim();
    let user = db::users::find_by_username(&state.pool, username)
        .await
        .map_err(|e| {
            tracing::error!("DB error during login: {e}");
            AppError::new(ErrorCode::InternalError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

    if !verify_password(&req.password, &user.hash_pass) {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }

    let token = crate::auth::user_auth::create_token(
        user.id,
        &user.username,
        &user.role,
        &state.jwt_secret,
    )
    .map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    Ok(Json(LoginResponse {
        token,
        user: UserSummary::from(&user),
    }))
}

/// GET /api/auth/me — identity carried by the presented token
pub async fn me(Extension(identity): Extension<UserIdentity>) -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "user": {
            "id": identity.user_id,
            "username": identity.username,
            "role": identity.role,
        }
    })))
}
