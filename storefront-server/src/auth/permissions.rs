//! Authorization guards

use crate::auth::CurrentUser;
use crate::utils::{AppError, AppResult};

/// Require the current user to be the administrator.
///
/// Used by every back-office route; customers get a 403 with the
/// AdminRequired code.
pub fn require_admin(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin {
        Ok(())
    } else {
        Err(AppError::admin_required())
    }
}

/// Require the current user to be a customer session.
///
/// Carts, checkout, and order history belong to customer sessions; the
/// administrator has neither a cart nor orders of their own.
pub fn require_customer(user: &CurrentUser) -> AppResult<()> {
    if user.is_admin {
        Err(AppError::forbidden(
            "Operation is only available to customer sessions",
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> CurrentUser {
        CurrentUser {
            email: "test@example.com".to_string(),
            name: "Test".to_string(),
            phone: String::new(),
            is_admin,
        }
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&user(true)).is_ok());
        assert!(require_admin(&user(false)).is_err());
    }

    #[test]
    fn test_require_customer() {
        assert!(require_customer(&user(false)).is_ok());
        assert!(require_customer(&user(true)).is_err());
    }
}
