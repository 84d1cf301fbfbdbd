//! JWT token service
//!
//! Handles generation, validation, and parsing of session tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JWT configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Signing secret (should be at least 32 bytes)
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
    /// Token audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        let secret = match load_jwt_secret() {
            Ok(secret) => secret,
            Err(e) => {
                #[cfg(debug_assertions)]
                {
                    tracing::warn!("JWT configuration error: {}, using generated key", e);
                    generate_printable_jwt_secret()
                }
                #[cfg(not(debug_assertions))]
                {
                    panic!("FATAL: JWT_SECRET configuration failed: {}", e);
                }
            }
        };

        Self {
            secret,
            expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1440), // 24 hours
            issuer: std::env::var("JWT_ISSUER")
                .unwrap_or_else(|_| "storefront-server".to_string()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "storefront-clients".to_string()),
        }
    }
}

/// JWT claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Customer email (Subject)
    pub sub: String,
    /// Display name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Administrator flag
    pub is_admin: bool,
    /// Token type
    pub token_type: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Generate a printable random JWT secret (development use)
fn generate_printable_jwt_secret() -> String {
    let allowed_chars =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+";

    let rng = SystemRandom::new();
    let mut key = String::new();

    for _ in 0..64 {
        let mut byte = [0u8; 1];
        if rng.fill(&mut byte).is_err() {
            return "storefront-development-fallback-key-must-be-replaced".to_string();
        }
        let idx = (byte[0] as usize) % allowed_chars.len();
        if let Some(c) = allowed_chars.chars().nth(idx) {
            key.push(c);
        }
    }

    key
}

/// Load the JWT secret from the environment
fn load_jwt_secret() -> Result<String, JwtError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) => {
            if secret.len() < 32 {
                return Err(JwtError::ConfigError(
                    "JWT_SECRET must be at least 32 characters long".to_string(),
                ));
            }
            Ok(secret)
        }
        Err(_) => {
            #[cfg(debug_assertions)]
            {
                tracing::warn!("JWT_SECRET not set, generating temporary key for development");
                Ok(generate_printable_jwt_secret())
            }
            #[cfg(not(debug_assertions))]
            {
                Err(JwtError::ConfigError(
                    "JWT_SECRET environment variable must be set in production".to_string(),
                ))
            }
        }
    }
}

/// JWT token service
#[derive(Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("issuer", &self.config.issuer)
            .field("audience", &self.config.audience)
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the default configuration
    pub fn new() -> Self {
        Self::with_config(JwtConfig::default())
    }

    /// Create a new JWT service with the given configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate a session token for a user
    pub fn generate_token(
        &self,
        email: &str,
        name: &str,
        phone: &str,
        is_admin: bool,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: email.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            is_admin,
            token_type: "access".to_string(),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

impl Default for JwtService {
    fn default() -> Self {
        Self::new()
    }
}

/// Current user context (parsed from JWT claims)
///
/// Created by the auth extractor and available to request handlers.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Customer email (session identity)
    pub email: String,
    /// Display name
    pub name: String,
    /// Phone number
    pub phone: String,
    /// Administrator flag
    pub is_admin: bool,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.sub,
            name: claims.name,
            phone: claims.phone,
            is_admin: claims.is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::with_config(JwtConfig {
            secret: "test-secret-key-at-least-32-characters!".to_string(),
            expiration_minutes: 60,
            issuer: "storefront-server".to_string(),
            audience: "storefront-clients".to_string(),
        })
    }

    #[test]
    fn test_jwt_generation_and_validation() {
        let service = test_service();

        let token = service
            .generate_token("ana@example.com", "Ana", "229-555-0101", false)
            .expect("Failed to generate test token");

        let claims = service
            .validate_token(&token)
            .expect("Failed to validate test token");

        assert_eq!(claims.sub, "ana@example.com");
        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.phone, "229-555-0101");
        assert!(!claims.is_admin);
    }

    #[test]
    fn test_admin_flag_round_trip() {
        let service = test_service();

        let token = service
            .generate_token("admin@pizzasjarochos.com", "Administrador", "", true)
            .expect("Failed to generate admin token");

        let claims = service.validate_token(&token).expect("Failed to validate");
        assert!(claims.is_admin);

        let user = CurrentUser::from(claims);
        assert_eq!(user.email, "admin@pizzasjarochos.com");
        assert!(user.is_admin);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let service = test_service();
        let other = JwtService::with_config(JwtConfig {
            secret: "another-secret-key-at-least-32-chars!".to_string(),
            ..service.config.clone()
        });

        let token = other
            .generate_token("ana@example.com", "Ana", "", false)
            .expect("Failed to generate token");

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_extract_from_header() {
        assert_eq!(
            JwtService::extract_from_header("Bearer abc.def.ghi"),
            Some("abc.def.ghi")
        );
        assert_eq!(JwtService::extract_from_header("Basic abc"), None);
    }
}
