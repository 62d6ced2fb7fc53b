//! Contribution Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A financial contribution, optionally linked to a member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Contribution {
    pub id: i64,
    pub member_id: Option<i64>,
    pub amount: Decimal,
    pub method: String,
    pub note: String,
    pub created_at: i64,
}

/// Contribution row joined with the contributing member's name (list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContributionWithMember {
    pub id: i64,
    pub member_id: Option<i64>,
    pub amount: Decimal,
    pub method: String,
    pub note: String,
    pub created_at: i64,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
}

/// Create contribution payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionCreate {
    #[serde(default)]
    pub member_id: Option<i64>,
    pub amount: Decimal,
    pub method: String,
    #[serde(default)]
    pub note: Option<String>,
}
