//! Member registry endpoints
//!
//! Every mutation follows the same shape: validate, write the member row,
//! then recompute category counts. The recompute runs before the response is
//! sent, so a successful mutation never returns while counts are stale. If
//! the recompute itself fails the member write stays committed: the error is
//! logged and the counts remain stale until the next successful mutation.

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::member::{Member, MemberInput};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::ServiceResult;

/// Validate a member payload.
///
/// firstname, phone and gender must never be empty for a persisted member.
/// ministry and department are required at creation but free on update
/// (full-replace semantics let an update clear them).
pub fn validate_input(data: &MemberInput, creating: bool) -> Result<(), AppError> {
    let mut missing: Vec<&str> = Vec::new();
    if data.firstname.trim().is_empty() {
        missing.push("firstname");
    }
    if data.phone.trim().is_empty() {
        missing.push("phone");
    }
    if data.gender.trim().is_empty() {
        missing.push("gender");
    }
    if creating {
        if data.ministry.trim().is_empty() {
            missing.push("ministry");
        }
        if data.department.trim().is_empty() {
            missing.push("department");
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(
            AppError::validation(format!("Missing required fields: {}", missing.join(", ")))
                .with_detail("fields", missing.join(",")),
        )
    }
}

/// Recompute category counts after a committed member write.
///
/// Failures are logged and swallowed; the triggering mutation still reports
/// success and the counts are at most one failed recompute stale.
async fn refresh_counts(state: &AppState) {
    if let Err(e) = db::counts::recompute(&state.pool).await {
        tracing::error!(error = %e, "Category count recompute failed; counts stale until next mutation");
    }
}

pub async fn list_members(State(state): State<AppState>) -> ServiceResult<Vec<Member>> {
    let members = db::members::list_members(&state.pool).await?;
    Ok(Json(members))
}

pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ServiceResult<Member> {
    let member = db::members::get_member(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MemberNotFound))?;
    Ok(Json(member))
}

pub async fn create_member(
    State(state): State<AppState>,
    Json(data): Json<MemberInput>,
) -> Result<(StatusCode, Json<Member>), ServiceError> {
    validate_input(&data, true)?;

    let member = db::members::create_member(&state.pool, &data).await?;
    refresh_counts(&state).await;

    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<MemberInput>,
) -> ServiceResult<Member> {
    validate_input(&data, false)?;

    let member = db::members::update_member(&state.pool, id, &data)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::MemberNotFound))?;
    refresh_counts(&state).await;

    Ok(Json(member))
}

pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, ServiceError> {
    let deleted = db::members::delete_member(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::MemberNotFound).into());
    }
    refresh_counts(&state).await;

    Ok(ApiResponse::ok())
}
