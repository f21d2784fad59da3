//! Merges CLI overrides onto file-based configuration.
//!
//! CLI arguments win over configuration files and `AZKAR_*` variables.

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, settings::Settings};
use std::path::Path;

const CONFIG_FILE_ENV: &str = "AZKAR_CONFIG_FILE";

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration from `config_path`, or through the
    /// default layered loader when absent. `--env` is applied before loading
    /// so it picks the environment file.
    ///
    /// Values are not validated yet; that happens after CLI overrides in
    /// [`merge_cli_args`](Self::merge_cli_args).
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(env) = cli.env.clone() {
            let env: crate::config::Environment = env.into();
            unsafe {
                std::env::set_var(crate::config::Environment::ENV_VAR, env.as_str());
            }
        }

        let config = match cli.config.as_deref() {
            Some(path) => Self::load_config_from_file(path)?,
            None => ConfigLoader::new()?.load_unvalidated()?,
        };
        Ok(Self::new(config))
    }

    fn load_config_from_file(path: &Path) -> Result<Settings, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::file_not_found(path.display().to_string()));
        }

        unsafe {
            std::env::set_var(CONFIG_FILE_ENV, path);
        }
        let config = ConfigLoader::new().and_then(|loader| loader.load_unvalidated());
        unsafe {
            std::env::remove_var(CONFIG_FILE_ENV);
        }

        config
    }

    /// Applies global flags, then command flags, then validates the result.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.clone().into();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
