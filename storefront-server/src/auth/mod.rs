//! Authentication and authorization
//!
//! JWT session tokens, the current-user extractor, the external identity
//! contract (hardcoded administrator), and route guards.

mod extractor;
mod identity;
mod jwt;
mod permissions;

pub use identity::{AuthenticatedUser, IdentityProvider};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use permissions::{require_admin, require_customer};
