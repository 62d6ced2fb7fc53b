//! Category count aggregation
//!
//! Ministry/department `member_count` columns are derived state: after every
//! member mutation they are rewritten from a full scan of the member table,
//! never patched incrementally. Concurrent recomputes may race, but each one
//! writes counts derived from a single consistent read of the members, so the
//! last writer always leaves a value that matches some serialization of the
//! mutations.

use sqlx::PgPool;

use super::{BoxError, normalize};

/// Count the fields whose normalized token set contains the category name.
pub fn tally<'a>(category_name: &str, fields: impl Iterator<Item = &'a str>) -> i64 {
    fields
        .filter(|f| normalize::field_matches(f, category_name))
        .count() as i64
}

/// Recompute every ministry and department member count from the current
/// member table and persist the results, including explicit zeros.
pub async fn recompute(pool: &PgPool) -> Result<(), BoxError> {
    let mut tx = pool.begin().await?;

    // One read of the member table serves both category kinds.
    let members: Vec<(String, String)> =
        sqlx::query_as("SELECT ministry, department FROM members")
            .fetch_all(&mut *tx)
            .await?;

    let ministries: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM ministries")
        .fetch_all(&mut *tx)
        .await?;
    for (id, name) in &ministries {
        let count = tally(name, members.iter().map(|(m, _)| m.as_str()));
        sqlx::query("UPDATE ministries SET member_count = $1 WHERE id = $2")
            .bind(count)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    let departments: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM departments")
        .fetch_all(&mut *tx)
        .await?;
    for (id, name) in &departments {
        let count = tally(name, members.iter().map(|(_, d)| d.as_str()));
        sqlx::query("UPDATE departments SET member_count = $1 WHERE id = $2")
            .bind(count)
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}
