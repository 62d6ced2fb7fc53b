//! Ministry/Department dashboard endpoints

use axum::{Json, extract::State};
use shared::models::category::CategoryCount;

use crate::db;
use crate::state::AppState;

use super::ServiceResult;

pub async fn list_ministries(State(state): State<AppState>) -> ServiceResult<Vec<CategoryCount>> {
    let ministries = db::categories::list_ministries(&state.pool).await?;
    Ok(Json(ministries))
}

pub async fn list_departments(State(state): State<AppState>) -> ServiceResult<Vec<CategoryCount>> {
    let departments = db::categories::list_departments(&state.pool).await?;
    Ok(Json(departments))
}
