use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// All settings can be overridden through environment variables:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | ADMIN_EMAIL | admin@pizzasjarochos.com | Administrator identity |
/// | ADMIN_PASSWORD | admin123 | Administrator password |
/// | ADMIN_NAME | Administrador | Administrator display name |
/// | REQUEST_TIMEOUT_MS | 30000 | Request timeout (milliseconds) |
/// | LOG_DIR | (unset) | Optional directory for rolling log files |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 ADMIN_PASSWORD=secret cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// JWT session configuration
    pub jwt: JwtConfig,
    /// Administrator email (the single back-office identity)
    pub admin_email: String,
    /// Administrator password
    pub admin_password: String,
    /// Administrator display name
    pub admin_name: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Optional log directory for rolling file output
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@pizzasjarochos.com".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
            admin_name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrador".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override the port, typically for tests
    pub fn with_port(mut self, http_port: u16) -> Self {
        self.http_port = http_port;
        self
    }
}
