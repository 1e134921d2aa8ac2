/**
 * Server Configuration
 *
 * This module loads the server configuration and opens the database.
 *
 * # Configuration Sources
 *
 * Lowest to highest precedence:
 * 1. Built-in defaults
 * 2. A TOML file named by `MESSAGELY_CONFIG`
 * 3. Environment variables (`DATABASE_URL`, `BIND_ADDR`, `JWT_SECRET`,
 *    `BCRYPT_COST`, `TOKEN_TTL_SECS`, `DATABASE_MAX_CONNECTIONS`)
 *
 * The binary loads `.env` with `dotenv` before calling `AppConfig::load`.
 *
 * The resulting `AppConfig` is passed explicitly to the stores and the token
 * issuer; nothing reads the environment after startup.
 */

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Secret used when `JWT_SECRET` is not configured
pub const DEV_JWT_SECRET: &str = "messagely-dev-secret-change-in-production";

/// Thirty days
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// Server configuration
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// sqlx SQLite URL, e.g. `sqlite://messagely.db` or `sqlite::memory:`
    pub database_url: String,
    /// Address the HTTP listener binds to
    pub bind_addr: String,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    /// Bcrypt work factor
    pub bcrypt_cost: u32,
    /// Session token lifetime
    pub token_ttl_secs: u64,
    /// Pool size for file-backed databases
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://messagely.db".to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            max_connections: 5,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load from defaults, the optional TOML file, and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("MESSAGELY_CONFIG") {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                Self::from_toml_file(&path)?
            }
            Err(_) => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;

        if config.jwt_secret == DEV_JWT_SECRET {
            tracing::warn!("JWT_SECRET not set, using the development secret");
        }

        Ok(config)
    }

    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Override fields from environment-style variables
    ///
    /// `lookup` returns the value of a variable, if set.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(addr) = lookup("BIND_ADDR") {
            self.bind_addr = addr;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(cost) = lookup("BCRYPT_COST") {
            self.bcrypt_cost = parse_var("BCRYPT_COST", &cost)?;
        }
        if let Some(ttl) = lookup("TOKEN_TTL_SECS") {
            self.token_ttl_secs = parse_var("TOKEN_TTL_SECS", &ttl)?;
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.max_connections = parse_var("DATABASE_MAX_CONNECTIONS", &max)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if self.database_url.is_empty() {
            return Err(ConfigError::MissingValue("database_url"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "bcrypt_cost",
                value: self.bcrypt_cost.to_string(),
            });
        }
        if self.token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "token_ttl_secs",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    database_url: Option<String>,
    bind_addr: Option<String>,
    jwt_secret: Option<String>,
    bcrypt_cost: Option<u32>,
    token_ttl_secs: Option<u64>,
    max_connections: Option<u32>,
}

impl AppConfigBuilder {
    /// Set the database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen address
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = Some(addr.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the token lifetime in seconds
    pub fn token_ttl_secs(mut self, secs: u64) -> Self {
        self.token_ttl_secs = Some(secs);
        self
    }

    /// Set the pool size
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = Some(max);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            database_url: self.database_url.unwrap_or(defaults.database_url),
            bind_addr: self.bind_addr.unwrap_or(defaults.bind_addr),
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            bcrypt_cost: self.bcrypt_cost.unwrap_or(defaults.bcrypt_cost),
            token_ttl_secs: self.token_ttl_secs.unwrap_or(defaults.token_ttl_secs),
            max_connections: self.max_connections.unwrap_or(defaults.max_connections),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

/// Open the SQLite pool and run migrations
///
/// In-memory databases live only as long as their connection, so they get a
/// single connection that is never recycled.
pub async fn connect_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if config.database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
