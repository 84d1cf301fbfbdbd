//! Unified error codes for the storefront service
//!
//! This module defines all error codes used across the server and its
//! clients. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Order errors
//! - 4xxx: Payment errors
//! - 5xxx: Catalog errors
//! - 6xxx: Review errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (email/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Administrator role required
    AdminRequired = 2002,

    // ==================== 3xxx: Order ====================
    /// Order not found
    OrderNotFound = 3001,
    /// Cannot submit an order with an empty cart
    OrderEmptyCart = 3002,
    /// Delivery address is required
    DeliveryAddressRequired = 3003,
    /// Delivery neighborhood is required
    DeliveryNeighborhoodRequired = 3004,

    // ==================== 4xxx: Payment ====================
    /// Transfer payment requires an attached proof
    TransferProofRequired = 4001,

    // ==================== 5xxx: Catalog ====================
    /// Menu item not found
    MenuItemNotFound = 5001,
    /// Menu item has invalid price
    MenuItemInvalidPrice = 5002,
    /// Promotion not found
    PromotionNotFound = 5101,

    // ==================== 6xxx: Review ====================
    /// Review rating must be between 1 and 5
    ReviewInvalidRating = 6001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::TokenExpired => "Token has expired",
            ErrorCode::TokenInvalid => "Token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role required",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmptyCart => "Cart is empty",
            ErrorCode::DeliveryAddressRequired => "Delivery address is required",
            ErrorCode::DeliveryNeighborhoodRequired => "Delivery neighborhood is required",

            // Payment
            ErrorCode::TransferProofRequired => "Transfer proof is required",

            // Catalog
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemInvalidPrice => "Menu item price must be greater than zero",
            ErrorCode::PromotionNotFound => "Promotion not found",

            // Review
            ErrorCode::ReviewInvalidRating => "Rating must be between 1 and 5",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unrecognized u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::RequiredField,
            7 => Self::ValueOutOfRange,
            1001 => Self::NotAuthenticated,
            1002 => Self::InvalidCredentials,
            1003 => Self::TokenExpired,
            1004 => Self::TokenInvalid,
            2001 => Self::PermissionDenied,
            2002 => Self::AdminRequired,
            3001 => Self::OrderNotFound,
            3002 => Self::OrderEmptyCart,
            3003 => Self::DeliveryAddressRequired,
            3004 => Self::DeliveryNeighborhoodRequired,
            4001 => Self::TransferProofRequired,
            5001 => Self::MenuItemNotFound,
            5002 => Self::MenuItemInvalidPrice,
            5101 => Self::PromotionNotFound,
            6001 => Self::ReviewInvalidRating,
            9001 => Self::InternalError,
            9002 => Self::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
