//! Contribution endpoints

use axum::{Json, extract::State};
use http::StatusCode;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::contribution::{Contribution, ContributionCreate, ContributionWithMember};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::ServiceResult;

pub async fn list_contributions(
    State(state): State<AppState>,
) -> ServiceResult<Vec<ContributionWithMember>> {
    let contributions = db::contributions::list_contributions(&state.pool).await?;
    Ok(Json(contributions))
}

pub async fn create_contribution(
    State(state): State<AppState>,
    Json(data): Json<ContributionCreate>,
) -> Result<(StatusCode, Json<Contribution>), ServiceError> {
    if data.amount <= Decimal::ZERO {
        return Err(AppError::new(ErrorCode::InvalidAmount).into());
    }

    let contribution = db::contributions::create_contribution(&state.pool, &data).await?;
    Ok((StatusCode::CREATED, Json(contribution)))
}
