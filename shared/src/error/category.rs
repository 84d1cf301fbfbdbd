//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Order errors
/// - 4xxx: Payment errors
/// - 5xxx: Catalog errors
/// - 6xxx: Review errors
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
    /// Order errors (3xxx)
    Order,
    /// Payment errors (4xxx)
    Payment,
    /// Catalog errors (5xxx)
    Catalog,
    /// Review errors (6xxx)
    Review,
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
            3000..4000 => Self::Order,
            4000..5000 => Self::Payment,
            5000..6000 => Self::Catalog,
            6000..7000 => Self::Review,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Order => "order",
            Self::Payment => "payment",
            Self::Catalog => "catalog",
            Self::Review => "review",
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
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Catalog);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Review);
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
        assert_eq!(ErrorCode::OrderNotFound.category(), ErrorCategory::Order);
        assert_eq!(
            ErrorCode::TransferProofRequired.category(),
            ErrorCategory::Payment
        );
        assert_eq!(
            ErrorCode::MenuItemNotFound.category(),
            ErrorCategory::Catalog
        );
        assert_eq!(
            ErrorCode::ReviewInvalidRating.category(),
            ErrorCategory::Review
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Auth).unwrap();
        assert_eq!(json, "\"auth\"");

        let category: ErrorCategory = serde_json::from_str("\"catalog\"").unwrap();
        assert_eq!(category, ErrorCategory::Catalog);
    }
}
