//! Member Model

use serde::{Deserialize, Serialize};

/// Church member entity
///
/// `ministry` may hold several comma-delimited values; `department` holds at
/// most one. Both are stored exactly as entered (original casing/whitespace);
/// normalization happens only when matching against category names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Member {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub phone: String,
    pub gender: String,
    pub ministry: String,
    pub department: String,
    pub home_location: String,
    /// Calendar date, `YYYY-MM-DD`
    pub joined_at: String,
    /// Server-assigned, immutable (Unix millis)
    pub created_at: i64,
}

/// Member payload for create and full-replace update
///
/// PUT carries the same shape as POST: absent optional fields become empty on
/// update, they are not preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberInput {
    pub firstname: String,
    #[serde(default)]
    pub lastname: Option<String>,
    pub phone: String,
    pub gender: String,
    pub ministry: String,
    pub department: String,
    #[serde(default)]
    pub home_location: Option<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_input_optional_fields_default() {
        let json = r#"{
            "firstname": "Grace",
            "phone": "0712345678",
            "gender": "Female",
            "ministry": "Ushering, Media",
            "department": "Women"
        }"#;
        let input: MemberInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.firstname, "Grace");
        assert_eq!(input.ministry, "Ushering, Media");
        assert!(input.lastname.is_none());
        assert!(input.home_location.is_none());
        assert!(input.joined_at.is_none());
    }

    #[test]
    fn test_member_serialize_roundtrip() {
        let member = Member {
            id: 7,
            firstname: "Joseph".into(),
            lastname: "Mwangi".into(),
            phone: "0700000001".into(),
            gender: "Male".into(),
            ministry: "media".into(),
            department: "men".into(),
            home_location: "Kasarani".into(),
            joined_at: "2024-03-10".into(),
            created_at: 1_710_000_000_000,
        };
        let json = serde_json::to_string(&member).unwrap();
        let parsed: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.firstname, "Joseph");
        assert_eq!(parsed.created_at, 1_710_000_000_000);
    }
}
