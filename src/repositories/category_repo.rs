//! Azkar category repository.

use std::collections::HashMap;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{Category, CategoryWithCount, NewCategory};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: AsyncDbPool,
}

impl CategoryRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// Inserts a category or refreshes its texts when the name exists.
    pub async fn upsert(&self, new_category: &NewCategory) -> Result<Category, AppError> {
        use crate::schema::azkar_categories::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(azkar_categories)
            .values(new_category)
            .on_conflict(name)
            .do_update()
            .set(new_category)
            .returning(Category::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_name(&self, category_name: &str) -> Result<Option<Category>, AppError> {
        use crate::schema::azkar_categories::dsl::*;
        let mut conn = self.pool.get().await?;

        azkar_categories
            .filter(name.eq(category_name))
            .select(Category::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// All categories ordered by id, each with its azkar count.
    pub async fn list_with_counts(&self) -> Result<Vec<CategoryWithCount>, AppError> {
        use crate::schema::{azkar, azkar_categories};
        let mut conn = self.pool.get().await?;

        let categories = azkar_categories::table
            .order(azkar_categories::id.asc())
            .select(Category::as_select())
            .load(&mut conn)
            .await?;

        let counts: HashMap<i32, i64> = azkar::table
            .group_by(azkar::category_id)
            .select((azkar::category_id, diesel::dsl::count_star()))
            .load::<(i32, i64)>(&mut conn)
            .await?
            .into_iter()
            .collect();

        Ok(categories
            .into_iter()
            .map(|category| CategoryWithCount {
                azkar_count: counts.get(&category.id).copied().unwrap_or(0),
                category,
            })
            .collect())
    }
}
