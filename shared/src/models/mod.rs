//! Data models
//!
//! Shared between the storefront server and its clients (via API).
//! All IDs are `i64`; money values are `f64` in currency units;
//! timestamps are `i64` UTC milliseconds.

pub mod cart;
pub mod menu_item;
pub mod order;
pub mod promotion;
pub mod review;

// Re-exports
pub use cart::*;
pub use menu_item::*;
pub use order::*;
pub use promotion::*;
pub use review::*;
