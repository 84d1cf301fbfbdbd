//! Shared types for the storefront service
//!
//! Common types used across the workspace: domain models, auth DTOs,
//! the unified error system, and small utilities.

pub mod client;
pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Error system re-exports (for convenient access)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
