//! Persistence behind a single async trait.
//!
//! `postgres` runs on diesel-async; `memory` keeps everything in sharded maps
//! and is what runs when no database is configured.

mod memory;
mod postgres;
#[cfg(test)]
pub(crate) mod testing;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use std::sync::Arc;

use async_trait::async_trait;
use jiff::civil::Date;

use crate::config::{Settings, StorageBackend};
use crate::db::{establish_async_connection_pool, run_pending_migrations};
use crate::error::AppResult;
use crate::models::{
    Azkar, AzkarProgress, Category, CategoryWithCount, NewAzkar, NewCategory, NewUser,
    TasbihCount, UpdateUser, User,
};

pub type DynStore = Arc<dyn AzkarStore>;

#[async_trait]
pub trait AzkarStore: Send + Sync {
    /// `"postgres"` or `"memory"`
    fn backend_name(&self) -> &'static str;

    async fn ping(&self) -> AppResult<()>;

    /// Insert or refresh by category name.
    async fn upsert_category(&self, category: &NewCategory) -> AppResult<Category>;

    /// Insert or refresh by `(title, category_id)`.
    async fn upsert_azkar(&self, azkar: &NewAzkar) -> AppResult<Azkar>;

    /// Ordered by id.
    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>>;

    async fn find_category_by_name(&self, name: &str) -> AppResult<Option<Category>>;

    /// Ordered by title.
    async fn list_azkar_by_category(&self, category_id: i32) -> AppResult<Vec<Azkar>>;

    /// Ordered by id.
    async fn list_azkar(&self) -> AppResult<Vec<Azkar>>;

    async fn find_azkar(&self, id: i32) -> AppResult<Option<Azkar>>;

    async fn find_azkar_by_title(&self, category: &str, title: &str)
    -> AppResult<Option<Azkar>>;

    /// Fails with `AppError::Duplicate` when the email is taken.
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User>;

    /// Overwrites `completed` for `(user, azkar, date)`.
    async fn upsert_progress(
        &self,
        user_id: i32,
        azkar_id: i32,
        date: Date,
        completed: i32,
    ) -> AppResult<AzkarProgress>;

    /// Rows with `from <= date <= to`, oldest first.
    async fn list_progress(&self, user_id: i32, from: Date, to: Date)
    -> AppResult<Vec<AzkarProgress>>;

    /// Returns whether the entry is bookmarked afterwards.
    async fn toggle_bookmark(&self, user_id: i32, azkar_id: i32) -> AppResult<bool>;

    /// Most recently bookmarked first.
    async fn list_bookmarks(&self, user_id: i32) -> AppResult<Vec<Azkar>>;

    /// Overwrites the count for `(user, date)`.
    async fn save_tasbih_count(&self, user_id: i32, date: Date, count: i32)
    -> AppResult<TasbihCount>;

    /// Rows with `from <= date <= to`, newest first.
    async fn list_tasbih_counts(
        &self,
        user_id: i32,
        from: Date,
        to: Date,
    ) -> AppResult<Vec<TasbihCount>>;
}

/// Opens the backend selected by `storage.backend`, migrating and seeding
/// PostgreSQL when configured to.
pub async fn connect(settings: &Settings) -> AppResult<DynStore> {
    match settings.resolved_backend() {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory store seeded from the built-in catalog");
            Ok(Arc::new(MemoryStore::with_catalog()))
        }
        StorageBackend::Postgres | StorageBackend::Auto => {
            if settings.database.auto_migrate {
                let applied = run_pending_migrations(&settings.database.url).await?;
                tracing::info!(count = applied.len(), "Applied pending migrations");
            }

            let pool = establish_async_connection_pool(&settings.database).await?;
            let store = PgStore::new(pool);
            tracing::info!(
                max_connections = settings.database.max_connections,
                "Connected to PostgreSQL"
            );

            if settings.database.auto_seed {
                let summary = crate::content::seed(&store).await?;
                tracing::info!(
                    categories = summary.categories,
                    azkar = summary.azkar,
                    "Seeded azkar catalog"
                );
            }

            Ok(Arc::new(store))
        }
    }
}
