//! Ministry/Department category counts

use serde::{Deserialize, Serialize};

/// A ministry or department category with its derived member count
///
/// Category rows are seeded by migration and never created or deleted by
/// member operations; only `member_count` changes, and always as a full
/// recomputation from the current member table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CategoryCount {
    pub id: i64,
    pub name: String,
    pub member_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_count_serialize() {
        let cat = CategoryCount {
            id: 1,
            name: "ushering".into(),
            member_count: 3,
        };
        let json = serde_json::to_string(&cat).unwrap();
        assert!(json.contains("\"name\":\"ushering\""));
        assert!(json.contains("\"member_count\":3"));
    }
}
