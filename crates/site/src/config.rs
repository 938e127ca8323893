//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SITE_DATABASE_URL` - `PostgreSQL` connection string
//! - `SITE_BASE_URL` - Public URL for the site
//! - `PLACES_API_KEY` - Places provider API key
//!
//! ## Optional
//! - `SITE_HOST` - Bind address (default: 127.0.0.1)
//! - `SITE_PORT` - Listen port (default: 3000)
//! - `PLACES_BASE_URL` - Places provider base URL (default: Foursquare v3)
//! - `SEED_LAT_LONG` - Seed-city coordinates (default: San Diego)
//! - `SEED_LIMIT` - Seed-city result count (default: 6)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};

use coffee_compass_core::Coordinates;
use secrecy::SecretString;
use thiserror::Error;

/// Default places provider endpoint (Foursquare Places API v3).
const DEFAULT_PLACES_BASE_URL: &str = "https://api.foursquare.com/v3";

/// Default seed-city coordinates (San Diego).
const DEFAULT_SEED_LAT_LONG: &str = "32.7157,-117.1611";

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Site application configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Places provider configuration
    pub places: PlacesConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Places provider configuration.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// Provider API key (server-side only)
    pub api_key: SecretString,
    /// Provider base URL
    pub base_url: String,
    /// Fixed coordinates for the seed-city query
    pub seed_lat_long: Coordinates,
    /// Result count for the seed-city query
    pub seed_limit: u32,
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the API key fails placeholder detection.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("SITE_DATABASE_URL")?;
        let host = get_env_or_default("SITE_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SITE_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SITE_PORT".to_string(), e.to_string()))?;
        let base_url = get_required_env("SITE_BASE_URL")?;

        let places = PlacesConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            places,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl PlacesConfig {
    /// Load places provider configuration from environment variables.
    ///
    /// Usable on its own by tools (like the seed import) that need the
    /// provider but not the rest of the site configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PLACES_API_KEY` is missing or a placeholder,
    /// or if the optional overrides fail to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let seed_raw = get_env_or_default("SEED_LAT_LONG", DEFAULT_SEED_LAT_LONG);
        let seed_lat_long = Coordinates::parse_lat_long(&seed_raw)
            .map_err(|e| ConfigError::InvalidEnvVar("SEED_LAT_LONG".to_string(), e.to_string()))?;
        let seed_limit = get_env_or_default("SEED_LIMIT", "6")
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar("SEED_LIMIT".to_string(), e.to_string()))?;

        Ok(Self {
            api_key: get_validated_secret("PLACES_API_KEY")?,
            base_url: get_env_or_default("PLACES_BASE_URL", DEFAULT_PLACES_BASE_URL),
            seed_lat_long,
            seed_limit,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a secret is not an obvious placeholder.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}
