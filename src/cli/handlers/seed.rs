//! Seed command handler

use crate::config::StorageBackend;
use crate::config::settings::Settings;
use crate::content::catalog;
use crate::db::establish_async_connection_pool;
use crate::error::AppResult;
use crate::store::PgStore;

pub struct SeedCommandHandler {
    config: Settings,
}

impl SeedCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Upserts the built-in catalog into PostgreSQL. The in-memory backend
    /// is seeded whenever it starts, so there is nothing to do for it.
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            for category in catalog::categories() {
                let count = catalog::azkar_in(category.name).count();
                println!("  - {} ({} azkar)", category.name, count);
            }
            println!(
                "Would upsert {} categories and {} azkar",
                catalog::categories().len(),
                catalog::azkar().len()
            );
            return Ok(());
        }

        if self.config.resolved_backend() == StorageBackend::Memory {
            println!("In-memory storage is seeded at startup; nothing to do");
            return Ok(());
        }

        self.config.database.validate()?;
        let pool = establish_async_connection_pool(&self.config.database).await?;
        let store = PgStore::new(pool);

        let summary = crate::content::seed(&store).await?;
        println!(
            "✓ Seeded {} categories and {} azkar",
            summary.categories, summary.azkar
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[tokio::test]
    async fn test_dry_run_needs_no_database() {
        let handler = SeedCommandHandler::new(Settings::default());
        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn test_memory_backend_is_a_no_op() {
        let handler = SeedCommandHandler::new(Settings::default());
        assert!(handler.execute(false).await.is_ok());
    }

    #[tokio::test]
    async fn test_postgres_backend_requires_valid_url() {
        let mut config = Settings::default();
        config.storage.backend = StorageBackend::Postgres;
        let result = SeedCommandHandler::new(config).execute(false).await;
        assert!(matches!(result, Err(AppError::Configuration { .. })));
    }
}
