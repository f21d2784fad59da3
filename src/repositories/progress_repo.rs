//! Daily azkar progress repository.

use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use jiff::civil::Date;
use jiff_diesel::ToDiesel;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{AzkarProgress, NewAzkarProgress};

#[derive(Clone)]
pub struct ProgressRepository {
    pool: AsyncDbPool,
}

impl ProgressRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// One row per `(user, azkar, date)`; a second call overwrites `completed`.
    pub async fn upsert(&self, progress: &NewAzkarProgress) -> Result<AzkarProgress, AppError> {
        use crate::schema::azkar_progress::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(azkar_progress)
            .values(progress)
            .on_conflict((user_id, azkar_id, date))
            .do_update()
            .set((
                completed.eq(excluded(completed)),
                updated_at.eq(diesel::dsl::now),
            ))
            .returning(AzkarProgress::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Rows for `owner` with `from <= date <= to`, oldest first.
    pub async fn list_for_user(
        &self,
        owner: i32,
        from: Date,
        to: Date,
    ) -> Result<Vec<AzkarProgress>, AppError> {
        use crate::schema::azkar_progress::dsl::*;
        let mut conn = self.pool.get().await?;

        azkar_progress
            .filter(user_id.eq(owner))
            .filter(date.ge(from.to_diesel()))
            .filter(date.le(to.to_diesel()))
            .order((date.asc(), azkar_id.asc()))
            .select(AzkarProgress::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
