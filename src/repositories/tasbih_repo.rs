//! Daily tasbih count repository.

use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use jiff::civil::Date;
use jiff_diesel::ToDiesel;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{NewTasbihCount, TasbihCount};

#[derive(Clone)]
pub struct TasbihRepository {
    pool: AsyncDbPool,
}

impl TasbihRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Overwrites the count for `(user, date)`.
    pub async fn upsert(&self, new_count: &NewTasbihCount) -> Result<TasbihCount, AppError> {
        use crate::schema::tasbih_counts::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(tasbih_counts)
            .values(new_count)
            .on_conflict((user_id, date))
            .do_update()
            .set((count.eq(excluded(count)), updated_at.eq(diesel::dsl::now)))
            .returning(TasbihCount::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    /// Counts for `owner` with `from <= date <= to`, newest first.
    pub async fn list_for_user(
        &self,
        owner: i32,
        from: Date,
        to: Date,
    ) -> Result<Vec<TasbihCount>, AppError> {
        use crate::schema::tasbih_counts::dsl::*;
        let mut conn = self.pool.get().await?;

        tasbih_counts
            .filter(user_id.eq(owner))
            .filter(date.ge(from.to_diesel()))
            .filter(date.le(to.to_diesel()))
            .order(date.desc())
            .select(TasbihCount::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
