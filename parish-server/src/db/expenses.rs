//! Expense database operations

use shared::models::expense::{Expense, ExpenseCreate};
use sqlx::PgPool;

use super::BoxError;

pub async fn list_expenses(pool: &PgPool) -> Result<Vec<Expense>, BoxError> {
    let rows: Vec<Expense> = sqlx::query_as(
        "SELECT id, title, amount, note, created_at FROM expenses \
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_expense(pool: &PgPool, data: &ExpenseCreate) -> Result<Expense, BoxError> {
    let now = shared::util::now_millis();
    let expense: Expense = sqlx::query_as(
        r#"
        INSERT INTO expenses (title, amount, note, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, title, amount, note, created_at
        "#,
    )
    .bind(&data.title)
    .bind(data.amount)
    .bind(data.note.as_deref().unwrap_or(""))
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(expense)
}
