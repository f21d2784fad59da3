//! Azkar repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Azkar, NewAzkar};

#[derive(Clone)]
pub struct AzkarRepository {
    pool: AsyncDbPool,
}

impl AzkarRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts an entry or refreshes it, keyed by `(title, category_id)`.
    pub async fn upsert(&self, new_azkar: &NewAzkar) -> Result<Azkar, AppError> {
        use crate::schema::azkar::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(azkar)
            .values(new_azkar)
            .on_conflict((title, category_id))
            .do_update()
            .set(new_azkar)
            .returning(Azkar::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, azkar_id: i32) -> Result<Option<Azkar>, AppError> {
        use crate::schema::azkar::dsl::*;
        let mut conn = self.pool.get().await?;

        azkar
            .filter(id.eq(azkar_id))
            .select(Azkar::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Looks an entry up by its natural key.
    pub async fn find_by_title(
        &self,
        category_name: &str,
        azkar_title: &str,
    ) -> Result<Option<Azkar>, AppError> {
        use crate::schema::{azkar, azkar_categories};
        let mut conn = self.pool.get().await?;

        azkar::table
            .inner_join(azkar_categories::table)
            .filter(azkar_categories::name.eq(category_name))
            .filter(azkar::title.eq(azkar_title))
            .select(Azkar::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Entries of one category ordered by title.
    pub async fn list_by_category(&self, category: i32) -> Result<Vec<Azkar>, AppError> {
        use crate::schema::azkar::dsl::*;
        let mut conn = self.pool.get().await?;

        azkar
            .filter(category_id.eq(category))
            .order((title.asc(), id.asc()))
            .select(Azkar::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn list_all(&self) -> Result<Vec<Azkar>, AppError> {
        use crate::schema::azkar::dsl::*;
        let mut conn = self.pool.get().await?;

        azkar
            .order(id.asc())
            .select(Azkar::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
