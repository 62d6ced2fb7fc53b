//! Ministry/Department category reads

use shared::models::category::CategoryCount;
use sqlx::PgPool;

use super::BoxError;

pub async fn list_ministries(pool: &PgPool) -> Result<Vec<CategoryCount>, BoxError> {
    let rows: Vec<CategoryCount> =
        sqlx::query_as("SELECT id, name, member_count FROM ministries ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn list_departments(pool: &PgPool) -> Result<Vec<CategoryCount>, BoxError> {
    let rows: Vec<CategoryCount> =
        sqlx::query_as("SELECT id, name, member_count FROM departments ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}
