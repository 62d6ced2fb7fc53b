//! User account Model

use serde::{Deserialize, Serialize};

/// Dashboard user account (full row, includes the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub hash_pass: String,
    pub role: String,
    pub created_at: i64,
}

/// User summary safe to return to clients (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_drops_hash() {
        let user = User {
            id: 1,
            username: "pastor".into(),
            hash_pass: "$argon2id$...".into(),
            role: "admin".into(),
            created_at: 0,
        };
        let summary = UserSummary::from(&user);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("hash_pass"));
        assert!(json.contains("\"username\":\"pastor\""));
    }
}
