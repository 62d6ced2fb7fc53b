//! Expense endpoints

use axum::{Json, extract::State};
use http::StatusCode;
use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::expense::{Expense, ExpenseCreate};

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

use super::ServiceResult;

pub async fn list_expenses(State(state): State<AppState>) -> ServiceResult<Vec<Expense>> {
    let expenses = db::expenses::list_expenses(&state.pool).await?;
    Ok(Json(expenses))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(data): Json<ExpenseCreate>,
) -> Result<(StatusCode, Json<Expense>), ServiceError> {
    if data.title.trim().is_empty() {
        return Err(AppError::validation("Title is required").into());
    }
    if data.amount <= Decimal::ZERO {
        return Err(AppError::new(ErrorCode::InvalidAmount).into());
    }

    let expense = db::expenses::create_expense(&state.pool, &data).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}
