//! Serve command handler

use crate::config::StorageBackend;
use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Validates and exits on `dry_run`, otherwise runs the server until
    /// shutdown.
    pub async fn execute(self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            return self.validate_only();
        }

        Server::new(self.config)
            .run()
            .await
            .map_err(|source| crate::error::AppError::Internal { source })
    }

    /// Validates configuration without binding or connecting.
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        match self.config.resolved_backend() {
            StorageBackend::Memory => println!("✓ Storage: in-memory (no database URL)"),
            _ => println!("✓ Storage: PostgreSQL"),
        }
        println!("✓ Calendar days follow time zone: {}", self.config.application.timezone);
        println!("Dry run completed successfully - configuration is ready for deployment");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
