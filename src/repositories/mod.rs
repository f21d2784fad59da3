//! Repository layer for the PostgreSQL backend.
//!
//! One repository per table, each holding a clone of the pool.

mod azkar_repo;
mod bookmark_repo;
mod category_repo;
mod progress_repo;
mod tasbih_repo;
mod user_repo;

pub use azkar_repo::AzkarRepository;
pub use bookmark_repo::BookmarkRepository;
pub use category_repo::CategoryRepository;
pub use progress_repo::ProgressRepository;
pub use tasbih_repo::TasbihRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// All repositories over one pool. Cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pool: AsyncDbPool,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub azkar: AzkarRepository,
    pub progress: ProgressRepository,
    pub bookmarks: BookmarkRepository,
    pub tasbih: TasbihRepository,
}

impl Repositories {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            categories: CategoryRepository::new(pool.clone()),
            azkar: AzkarRepository::new(pool.clone()),
            progress: ProgressRepository::new(pool.clone()),
            bookmarks: BookmarkRepository::new(pool.clone()),
            tasbih: TasbihRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &AsyncDbPool {
        &self.pool
    }
}
