//! Expense Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: Decimal,
    pub note: String,
    pub created_at: i64,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub title: String,
    pub amount: Decimal,
    #[serde(default)]
    pub note: Option<String>,
}
