//! Identity provider
//!
//! The storefront delegates identity to a minimal external contract:
//! `authenticate(email, password)` yields a profile with an admin flag.
//! A single hardcoded administrator identity exists; every other
//! credential pair is a customer session. Nothing is persisted beyond
//! the issued token.

use shared::client::LoginRequest;

use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::AppResult;

/// Authenticated session profile
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub is_admin: bool,
}

/// Identity provider with the single administrator identity
#[derive(Debug, Clone)]
pub struct IdentityProvider {
    admin_email: String,
    admin_password: String,
    admin_name: String,
}

/// Fallback display name for customer sessions without a profile name
const DEFAULT_CUSTOMER_NAME: &str = "Usuario Demo";

impl IdentityProvider {
    pub fn new(
        admin_email: impl Into<String>,
        admin_password: impl Into<String>,
        admin_name: impl Into<String>,
    ) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
            admin_name: admin_name.into(),
        }
    }

    /// Authenticate a login request
    ///
    /// The admin flag is set iff the credentials match the configured
    /// administrator identity; any other well-formed credential pair
    /// yields a customer profile.
    pub fn authenticate(&self, req: &LoginRequest) -> AppResult<AuthenticatedUser> {
        validate_required_text(&req.email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&req.password, "password", MAX_PASSWORD_LEN)?;
        validate_optional_text(&req.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&req.phone, "phone", MAX_SHORT_TEXT_LEN)?;

        // The admin flag is granted only on an exact credential match;
        // any other pair authenticates as a customer session.
        let is_admin = req.email == self.admin_email && req.password == self.admin_password;

        let name = req
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                if is_admin {
                    self.admin_name.clone()
                } else {
                    DEFAULT_CUSTOMER_NAME.to_string()
                }
            });

        Ok(AuthenticatedUser {
            name,
            email: req.email.clone(),
            phone: req.phone.clone().unwrap_or_default(),
            is_admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> IdentityProvider {
        IdentityProvider::new("admin@pizzasjarochos.com", "admin123", "Administrador")
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            name: None,
            email: email.to_string(),
            phone: None,
            password: password.to_string(),
        }
    }

    #[test]
    fn test_admin_credentials_grant_admin() {
        let user = provider()
            .authenticate(&login("admin@pizzasjarochos.com", "admin123"))
            .expect("admin login should succeed");

        assert!(user.is_admin);
        assert_eq!(user.name, "Administrador");
    }

    #[test]
    fn test_admin_email_with_wrong_password_is_customer() {
        let user = provider()
            .authenticate(&login("admin@pizzasjarochos.com", "wrong"))
            .expect("login should still succeed");
        assert!(!user.is_admin);
    }

    #[test]
    fn test_customer_credentials_grant_customer() {
        let user = provider()
            .authenticate(&login("ana@example.com", "whatever"))
            .expect("customer login should succeed");

        assert!(!user.is_admin);
        assert_eq!(user.name, "Usuario Demo");
        assert_eq!(user.email, "ana@example.com");
    }

    #[test]
    fn test_profile_fields_carried_through() {
        let req = LoginRequest {
            name: Some("Ana Martínez".to_string()),
            email: "ana@example.com".to_string(),
            phone: Some("229-555-0101".to_string()),
            password: "secret".to_string(),
        };

        let user = provider().authenticate(&req).expect("login should succeed");
        assert_eq!(user.name, "Ana Martínez");
        assert_eq!(user.phone, "229-555-0101");
    }

    #[test]
    fn test_blank_email_rejected() {
        assert!(provider().authenticate(&login("", "secret")).is_err());
        assert!(provider().authenticate(&login("a@b.c", "")).is_err());
    }
}
