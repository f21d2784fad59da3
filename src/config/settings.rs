//! Settings structures loaded from TOML files and environment variables

use serde::{Deserialize, Serialize};

use crate::logger::LoggerConfig;

fn default_app_name() -> String {
    "azkar".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_keep_alive_timeout() -> u64 {
    75
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_access_token_expiration() -> i64 {
    1
}

fn default_refresh_token_expiration() -> i64 {
    168
}

/// Application identity and calendar settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_app_name")]
    pub name: String,

    #[serde(default = "default_app_version")]
    pub version: String,

    /// IANA zone that decides which calendar day "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
            timezone: default_timezone(),
        }
    }
}

/// Axum HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive_timeout")]
    pub keep_alive_timeout: u64,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout: default_request_timeout(),
            keep_alive_timeout: default_keep_alive_timeout(),
            cors_origins: Vec::new(),
        }
    }
}

/// PostgreSQL connection pool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Seconds to wait for a pooled connection
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Run pending migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,

    /// Load the built-in azkar catalog on startup
    #[serde(default = "default_true")]
    pub auto_seed: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
            auto_migrate: false,
            auto_seed: true,
        }
    }
}

/// Where user data lives
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL when `database.url` is set, memory otherwise
    #[default]
    Auto,
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
}

/// JWT authentication configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HMAC secret, at least 32 characters. Set it through
    /// `AZKAR_JWT__SECRET` outside development.
    #[serde(default)]
    pub secret: String,

    /// Access token lifetime in hours
    #[serde(default = "default_access_token_expiration")]
    pub access_token_expiration: i64,

    /// Refresh token lifetime in hours
    #[serde(default = "default_refresh_token_expiration")]
    pub refresh_token_expiration: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            access_token_expiration: default_access_token_expiration(),
            refresh_token_expiration: default_refresh_token_expiration(),
        }
    }
}

/// Root of the configuration tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub application: ApplicationConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub jwt: JwtConfig,

    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Backend actually used once `auto` is resolved against `database.url`.
    pub fn resolved_backend(&self) -> StorageBackend {
        match self.storage.backend {
            StorageBackend::Auto if self.database.url.trim().is_empty() => StorageBackend::Memory,
            StorageBackend::Auto => StorageBackend::Postgres,
            explicit => explicit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.application.name, "azkar");
        assert_eq!(settings.application.timezone, "UTC");
        assert_eq!(settings.server.address(), "127.0.0.1:3000");
        assert!(settings.database.auto_seed);
        assert!(!settings.database.auto_migrate);
        assert_eq!(settings.storage.backend, StorageBackend::Auto);
    }

    #[test]
    fn test_auto_backend_follows_database_url() {
        let mut settings = Settings::default();
        assert_eq!(settings.resolved_backend(), StorageBackend::Memory);

        settings.database.url = "postgres://localhost/azkar".to_string();
        assert_eq!(settings.resolved_backend(), StorageBackend::Postgres);

        settings.storage.backend = StorageBackend::Memory;
        assert_eq!(settings.resolved_backend(), StorageBackend::Memory);
    }

    #[test]
    fn test_deserialize_sections_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
            [application]
            timezone = "Asia/Riyadh"

            [server]
            port = 8080
            cors_origins = ["http://localhost:5173"]

            [storage]
            backend = "postgres"

            [logger.file]
            enabled = true
            max_files = 9
            "#,
        )
        .unwrap();

        assert_eq!(settings.application.timezone, "Asia/Riyadh");
        assert_eq!(settings.application.name, "azkar");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.cors_origins.len(), 1);
        assert_eq!(settings.storage.backend, StorageBackend::Postgres);
        assert!(settings.logger.file.enabled);
        assert_eq!(settings.logger.file.max_files, 9);
        assert_eq!(settings.jwt.refresh_token_expiration, 168);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result: Result<Settings, _> = toml::from_str("[storage]\nbackend = \"sqlite\"\n");
        assert!(result.is_err());
    }
}
