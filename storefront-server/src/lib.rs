//! Storefront Server - single-tenant pizza ordering with a back office
//!
//! # Architecture overview
//!
//! The server owns all business state in memory: the catalog and order
//! ledger are process-wide stores seeded at startup, carts belong to
//! customer sessions, and identity is delegated to a minimal external
//! contract (one hardcoded administrator). Presentation and persistence
//! live outside this crate.
//!
//! # Module structure
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT sessions, identity, guards
//! ├── catalog/       # Menu items and promotions
//! ├── cart/          # Per-session carts and totals
//! ├── orders/        # Order ledger, status, message threads
//! ├── reviews/       # Customer reviews
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Validation, logging, error re-exports
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod orders;
pub mod reviews;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use core::{Config, Server, ServerState};
pub use orders::OrderLedger;
pub use reviews::ReviewBoard;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    +------------------------------------------+
    |   Pizzas Jarochos - Storefront Server    |
    |   sabor tradicional veracruzano          |
    +------------------------------------------+
    "#
    );
}
