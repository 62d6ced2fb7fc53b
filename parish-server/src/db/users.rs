//! User account database operations

use shared::models::user::User;
use sqlx::PgPool;

use super::BoxError;

pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<User>, BoxError> {
    let row: Option<User> = sqlx::query_as(
        "SELECT id, username, hash_pass, role, created_at FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Insert a new account. Registration always creates the `user` role;
/// elevated roles are assigned out of band.
pub async fn create_user(pool: &PgPool, username: &str, hash_pass: &str) -> Result<User, BoxError> {
    let now = shared::util::now_millis();
    let user: User = sqlx::query_as(
        r#"
        INSERT INTO users (username, hash_pass, role, created_at)
        VALUES ($1, $2, 'user', $3)
        RETURNING id, username, hash_pass, role, created_at
        "#,
    )
    .bind(username)
    .bind(hash_pass)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(user)
}
