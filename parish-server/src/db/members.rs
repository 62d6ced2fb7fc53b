//! Member database operations

use shared::models::member::{Member, MemberInput};
use sqlx::PgPool;

use super::BoxError;

const MEMBER_COLUMNS: &str = "id, firstname, lastname, phone, gender, ministry, \
     department, home_location, joined_at, created_at";

pub async fn list_members(pool: &PgPool) -> Result<Vec<Member>, BoxError> {
    let rows: Vec<Member> = sqlx::query_as(&format!(
        "SELECT {MEMBER_COLUMNS} FROM members ORDER BY created_at DESC, id DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_member(pool: &PgPool, id: i64) -> Result<Option<Member>, BoxError> {
    let row: Option<Member> =
        sqlx::query_as(&format!("SELECT {MEMBER_COLUMNS} FROM members WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

pub async fn create_member(pool: &PgPool, data: &MemberInput) -> Result<Member, BoxError> {
    let now = shared::util::now_millis();
    let joined_at = data
        .joined_at
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(shared::util::today);

    let member: Member = sqlx::query_as(&format!(
        r#"
        INSERT INTO members (
            firstname, lastname, phone, gender, ministry,
            department, home_location, joined_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {MEMBER_COLUMNS}
        "#
    ))
    .bind(&data.firstname)
    .bind(data.lastname.as_deref().unwrap_or(""))
    .bind(&data.phone)
    .bind(&data.gender)
    .bind(&data.ministry)
    .bind(&data.department)
    .bind(data.home_location.as_deref().unwrap_or(""))
    .bind(&joined_at)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(member)
}

/// Full-record replace: every mutable column is overwritten, absent optional
/// fields become empty. `created_at` is immutable. Returns `None` when the id
/// does not exist.
pub async fn update_member(
    pool: &PgPool,
    id: i64,
    data: &MemberInput,
) -> Result<Option<Member>, BoxError> {
    let joined_at = data
        .joined_at
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(shared::util::today);

    let member: Option<Member> = sqlx::query_as(&format!(
        r#"
        UPDATE members SET
            firstname = $1, lastname = $2, phone = $3, gender = $4,
            ministry = $5, department = $6, home_location = $7, joined_at = $8
        WHERE id = $9
        RETURNING {MEMBER_COLUMNS}
        "#
    ))
    .bind(&data.firstname)
    .bind(data.lastname.as_deref().unwrap_or(""))
    .bind(&data.phone)
    .bind(&data.gender)
    .bind(&data.ministry)
    .bind(&data.department)
    .bind(data.home_location.as_deref().unwrap_or(""))
    .bind(&joined_at)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(member)
}

/// Delete by id. Returns `false` when zero rows were affected.
pub async fn delete_member(pool: &PgPool, id: i64) -> Result<bool, BoxError> {
    let rows = sqlx::query("DELETE FROM members WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
