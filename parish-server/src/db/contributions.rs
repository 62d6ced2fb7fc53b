//! Contribution database operations

use shared::models::contribution::{Contribution, ContributionCreate, ContributionWithMember};
use sqlx::PgPool;

use super::BoxError;

pub async fn list_contributions(pool: &PgPool) -> Result<Vec<ContributionWithMember>, BoxError> {
    let rows: Vec<ContributionWithMember> = sqlx::query_as(
        r#"
        SELECT c.id, c.member_id, c.amount, c.method, c.note, c.created_at,
               m.firstname, m.lastname
        FROM contributions c
        LEFT JOIN members m ON c.member_id = m.id
        ORDER BY c.created_at DESC, c.id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_contribution(
    pool: &PgPool,
    data: &ContributionCreate,
) -> Result<Contribution, BoxError> {
    let now = shared::util::now_millis();
    let contribution: Contribution = sqlx::query_as(
        r#"
        INSERT INTO contributions (member_id, amount, method, note, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, member_id, amount, method, note, created_at
        "#,
    )
    .bind(data.member_id)
    .bind(data.amount)
    .bind(&data.method)
    .bind(data.note.as_deref().unwrap_or(""))
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(contribution)
}
