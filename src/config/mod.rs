//! Layered configuration
//!
//! # Priority (lowest to highest)
//! 1. `default.toml`
//! 2. `{environment}.toml`
//! 3. `local.toml` (not committed)
//! 4. `AZKAR_*` environment variables, `__` between nested keys
//! 5. CLI flags, merged by `cli::config_merger`

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use loader::ConfigLoader;
pub use settings::{
    ApplicationConfig, DatabaseConfig, JwtConfig, ServerConfig, Settings, StorageBackend,
    StorageConfig,
};
