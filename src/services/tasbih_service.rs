use jiff::ToSpan;
use jiff::civil::Date;

use crate::content::catalog::{self, TasbihPreset};
use crate::error::{AppError, AppResult};
use crate::models::TasbihCount;
use crate::services::Clock;
use crate::store::DynStore;

pub const DEFAULT_DAYS: i64 = 30;
pub const MAX_DAYS: i64 = 365;

#[derive(Clone)]
pub struct TasbihService {
    store: DynStore,
    clock: Clock,
}

impl TasbihService {
    pub fn new(store: DynStore, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Overwrites the user's count for `date` (today when absent).
    pub async fn save(&self, user_id: i32, count: i32, date: Option<Date>) -> AppResult<TasbihCount> {
        if count < 0 {
            return Err(AppError::validation("count", "must not be negative"));
        }

        let today = self.clock.today();
        let date = date.unwrap_or(today);
        if date > today {
            return Err(AppError::validation("date", "cannot be in the future"));
        }

        let row = self.store.save_tasbih_count(user_id, date, count).await?;
        tracing::debug!(user_id, %date, count, "Saved tasbih count");
        Ok(row)
    }

    /// Daily counts for the last `days` days including today, newest first.
    pub async fn counts(&self, user_id: i32, days: Option<i64>) -> AppResult<Vec<TasbihCount>> {
        let days = days.unwrap_or(DEFAULT_DAYS);
        if !(1..=MAX_DAYS).contains(&days) {
            return Err(AppError::validation(
                "days",
                format!("must be between 1 and {}", MAX_DAYS),
            ));
        }

        let to = self.clock.today();
        let from = to
            .checked_sub((days - 1).days())
            .map_err(|e| AppError::validation("days", e.to_string()))?;
        self.store.list_tasbih_counts(user_id, from, to).await
    }

    pub fn presets(&self) -> &'static [TasbihPreset] {
        catalog::tasbih_presets()
    }
}
