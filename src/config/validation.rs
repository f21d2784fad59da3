//! Configuration validation
//!
//! Each section validates itself; `Settings::validate` runs them in order and
//! stops at the first failure.

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::{
    ApplicationConfig, DatabaseConfig, JwtConfig, ServerConfig, Settings, StorageBackend,
};

impl ApplicationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::validation(
                "application.name",
                "Application name cannot be empty.",
            ));
        }

        self.time_zone().map(|_| ())
    }

    /// Resolves `timezone` through the bundled tz database.
    pub fn time_zone(&self) -> Result<jiff::tz::TimeZone, ConfigError> {
        if self.timezone.eq_ignore_ascii_case("utc") {
            return Ok(jiff::tz::TimeZone::UTC);
        }
        jiff::tz::TimeZone::get(&self.timezone).map_err(|e| {
            ConfigError::validation(
                "application.timezone",
                format!("Unknown time zone '{}': {}", self.timezone, e),
            )
        })
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::validation(
                "server.port",
                "Port must be between 1 and 65535.",
            ));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::validation(
                "server.request_timeout",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.keep_alive_timeout == 0 {
            return Err(ConfigError::validation(
                "server.keep_alive_timeout",
                "Keep-alive timeout must be greater than 0 seconds.",
            ));
        }

        if let Some(origin) = self
            .cors_origins
            .iter()
            .find(|o| o.as_str() != "*" && !o.starts_with("http://") && !o.starts_with("https://"))
        {
            return Err(ConfigError::validation(
                "server.cors_origins",
                format!("Origin '{}' must start with http:// or https://", origin),
            ));
        }

        Ok(())
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL is required for the postgres backend.",
            ));
        }

        if !self.url.starts_with("postgres://") && !self.url.starts_with("postgresql://") {
            return Err(ConfigError::validation(
                "database.url",
                "Invalid database URL. Expected postgres://[user:password@]host[:port]/database",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Max connections must be greater than 0.",
            ));
        }

        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                format!(
                    "Min connections ({}) cannot exceed max connections ({}).",
                    self.min_connections, self.max_connections
                ),
            ));
        }

        if self.connection_timeout == 0 {
            return Err(ConfigError::validation(
                "database.connection_timeout",
                "Connection timeout must be greater than 0 seconds.",
            ));
        }

        Ok(())
    }
}

/// Shipped in `config/default.toml`; anyone can sign tokens with it.
pub const PLACEHOLDER_JWT_SECRET: &str = "change-me-to-a-long-random-secret-value";

impl JwtConfig {
    /// Like [`JwtConfig::validate`], and production refuses the shipped
    /// placeholder secret.
    pub fn validate_for(&self, environment: Environment) -> Result<(), ConfigError> {
        self.validate()?;
        if environment == Environment::Production && self.secret == PLACEHOLDER_JWT_SECRET {
            return Err(ConfigError::validation(
                "jwt.secret",
                "The default JWT secret cannot be used in production. Set AZKAR_JWT__SECRET",
            ));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.is_empty() {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret cannot be empty",
            ));
        }

        if self.secret.len() < 32 {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret should be at least 32 characters",
            ));
        }

        if self.access_token_expiration <= 0 {
            return Err(ConfigError::validation(
                "jwt.access_token_expiration",
                "Access token expiration must be positive",
            ));
        }

        if self.refresh_token_expiration <= self.access_token_expiration {
            return Err(ConfigError::validation(
                "jwt.refresh_token_expiration",
                "Refresh token expiration should be longer than access token expiration",
            ));
        }

        Ok(())
    }
}

impl Settings {
    /// Validates against the environment named by `AZKAR_APP_ENV`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_for(Environment::from_env())
    }

    pub fn validate_for(&self, environment: Environment) -> Result<(), ConfigError> {
        self.application.validate()?;
        self.server.validate()?;
        if self.resolved_backend() == StorageBackend::Postgres {
            self.database.validate()?;
        }
        self.jwt.validate_for(environment)?;
        self.logger
            .validate()
            .map_err(|e| ConfigError::validation("logger", e.to_string()))?;
        Ok(())
    }
}
