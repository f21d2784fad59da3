//! Bookmark repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Azkar, NewBookmark};

#[derive(Clone)]
pub struct BookmarkRepository {
    pool: AsyncDbPool,
}

impl BookmarkRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Removes the bookmark if present, otherwise creates it.
    /// Returns whether the entry is bookmarked afterwards.
    pub async fn toggle(&self, bookmark: NewBookmark) -> Result<bool, AppError> {
        use crate::schema::bookmarks::dsl::*;
        let mut conn = self.pool.get().await?;

        let removed = diesel::delete(
            bookmarks
                .filter(user_id.eq(bookmark.user_id))
                .filter(azkar_id.eq(bookmark.azkar_id)),
        )
        .execute(&mut conn)
        .await?;

        if removed > 0 {
            return Ok(false);
        }

        diesel::insert_into(bookmarks)
            .values(&bookmark)
            .on_conflict((user_id, azkar_id))
            .do_nothing()
            .execute(&mut conn)
            .await?;

        Ok(true)
    }

    /// Bookmarked entries of `owner`, most recent first.
    pub async fn list_for_user(&self, owner: i32) -> Result<Vec<Azkar>, AppError> {
        use crate::schema::{azkar, bookmarks};
        let mut conn = self.pool.get().await?;

        bookmarks::table
            .inner_join(azkar::table)
            .filter(bookmarks::user_id.eq(owner))
            .order((bookmarks::created_at.desc(), bookmarks::id.desc()))
            .select(Azkar::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
