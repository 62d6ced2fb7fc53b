//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Member errors
/// - 4xxx: Contribution errors
/// - 5xxx: Expense errors
/// - 6xxx: Ministry/Department category errors
/// - 7xxx: User account errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Member errors (3xxx)
    Member,
    /// Contribution errors (4xxx)
    Contribution,
    /// Expense errors (5xxx)
    Expense,
    /// Ministry/Department errors (6xxx)
    Category,
    /// User account errors (7xxx)
    User,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Member,
            4000..5000 => Self::Contribution,
            5000..6000 => Self::Expense,
            6000..7000 => Self::Category,
            7000..8000 => Self::User,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Member => "member",
            Self::Contribution => "contribution",
            Self::Expense => "expense",
            Self::Category => "category",
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Member);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Contribution);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Expense);
        assert_eq!(ErrorCategory::from_code(6101), ErrorCategory::Category);
        assert_eq!(ErrorCategory::from_code(7002), ErrorCategory::User);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NotAuthenticated.category(), ErrorCategory::Auth);
        assert_eq!(
            ErrorCode::PermissionDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::MemberNotFound.category(), ErrorCategory::Member);
        assert_eq!(
            ErrorCode::ContributionNotFound.category(),
            ErrorCategory::Contribution
        );
        assert_eq!(ErrorCode::ExpenseNotFound.category(), ErrorCategory::Expense);
        assert_eq!(
            ErrorCode::MinistryNotFound.category(),
            ErrorCategory::Category
        );
        assert_eq!(ErrorCode::UserNotFound.category(), ErrorCategory::User);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Member.name(), "member");
        assert_eq!(ErrorCategory::Category.name(), "category");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Auth).unwrap();
        assert_eq!(json, "\"auth\"");

        let category: ErrorCategory = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(category, ErrorCategory::Member);
    }
}
