//! Server configuration from environment variables.
//!
//! The configuration is constructed once in `main` and shared through
//! `AppState`; handlers never read the environment directly.

use std::env;
use std::net::{IpAddr, SocketAddr};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Application name reported by the root endpoint.
    pub app_name: String,
    /// Deployment environment label (development, staging, production).
    pub app_env: String,
    /// Debug flag.
    pub debug: bool,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Host address to bind.
    pub host: IpAddr,
    /// Server port to listen on.
    pub port: u16,
    /// CORS allowed origins (comma-separated, or "*" for all).
    pub allowed_origins: String,
    /// Whether the CORS layer is mounted at all.
    pub cors_enabled: bool,
    /// Whether CORS responses allow credentials.
    pub cors_allow_credentials: bool,
    /// JWT settings, carried for deployment parity. No route on this
    /// surface enforces authentication.
    pub jwt: JwtConfig,
}

/// JWT configuration.
#[derive(Clone)]
pub struct JwtConfig {
    /// Signing secret.
    pub secret: String,
    /// Signing algorithm name.
    pub algorithm: String,
    /// Token lifetime in seconds.
    pub expiration_secs: u64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("expiration_secs", &self.expiration_secs)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `JWT_SECRET`: token signing secret
    ///
    /// Optional:
    /// - `APP_NAME` (default: "Manuscript API")
    /// - `APP_ENV` (default: "development")
    /// - `DEBUG` (default: true)
    /// - `LOG_LEVEL` (default: "info")
    /// - `HOST` (default: 0.0.0.0)
    /// - `PORT` (default: 8000)
    /// - `ALLOWED_ORIGINS` (default: "http://localhost:3000")
    /// - `CORS_ENABLED` (default: true)
    /// - `CORS_ALLOW_CREDENTIALS` (default: true)
    /// - `JWT_ALGORITHM` (default: "HS256")
    /// - `JWT_EXPIRATION` (seconds, default: 3600)
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_name = env::var("APP_NAME").unwrap_or_else(|_| "Manuscript API".to_string());
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let debug = env_flag("DEBUG", true);
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let host = match env::var("HOST") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "HOST".to_string(),
                reason: format!("not an IP address: {raw}"),
            })?,
            Err(_) => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: format!("not a port number: {raw}"),
            })?,
            Err(_) => 8000,
        };

        let allowed_origins =
            env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let cors_enabled = env_flag("CORS_ENABLED", true);
        let cors_allow_credentials = env_flag("CORS_ALLOW_CREDENTIALS", true);

        let jwt = JwtConfig {
            secret: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            algorithm: env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string()),
            expiration_secs: env::var("JWT_EXPIRATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
        };

        Ok(Self {
            app_name,
            app_env,
            debug,
            log_level,
            host,
            port,
            allowed_origins,
            cors_enabled,
            cors_allow_credentials,
            jwt,
        })
    }

    /// Get the socket address for the server.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Interpret a flag value; anything but "false"/"0"/"no" counts as set.
fn parse_flag(value: &str) -> bool {
    let value = value.to_lowercase();
    value != "false" && value != "0" && value != "no"
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name).map(|v| parse_flag(&v)).unwrap_or(default)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Invalid environment variable value.
    #[error("invalid value for environment variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}
