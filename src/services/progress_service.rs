use jiff::civil::Date;

use crate::error::{AppError, AppResult};
use crate::models::AzkarProgress;
use crate::services::Clock;
use crate::store::DynStore;

/// Today's count for one entry after a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    pub azkar_id: i32,
    pub date: Date,
    pub completed: i32,
    pub times: i32,
    pub is_completed: bool,
}

#[derive(Clone)]
pub struct ProgressService {
    store: DynStore,
    clock: Clock,
}

impl ProgressService {
    pub fn new(store: DynStore, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Sets today's completed count for `azkar_id`, replacing any earlier
    /// value for the same day.
    pub async fn record(&self, user_id: i32, azkar_id: i32, completed: i32) -> AppResult<ProgressRecord> {
        if completed < 0 {
            return Err(AppError::validation("completed", "must not be negative"));
        }

        let azkar = self
            .store
            .find_azkar(azkar_id)
            .await?
            .ok_or_else(|| AppError::not_found("azkar", "id", azkar_id))?;

        let today = self.clock.today();
        let row = self
            .store
            .upsert_progress(user_id, azkar.id, today, completed)
            .await?;

        tracing::debug!(user_id, azkar_id, completed, "Recorded progress");

        Ok(ProgressRecord {
            azkar_id: row.azkar_id,
            date: today,
            completed: row.completed,
            times: azkar.times,
            is_completed: row.completed >= azkar.times,
        })
    }

    /// Progress rows for one day, today when `date` is absent.
    pub async fn for_day(&self, user_id: i32, date: Option<Date>) -> AppResult<(Date, Vec<AzkarProgress>)> {
        let date = date.unwrap_or_else(|| self.clock.today());
        let rows = self.store.list_progress(user_id, date, date).await?;
        Ok((date, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use crate::store::{AzkarStore, MemoryStore};
    use jiff::civil::date;
    use std::sync::Arc;

    async fn setup() -> (ProgressService, i32) {
        let store = Arc::new(MemoryStore::with_catalog());
        let user = store
            .create_user(NewUser {
                name: "A".to_string(),
                email: "a@example.com".to_string(),
                password: "hash".to_string(),
                avatar: None,
            })
            .await
            .unwrap();
        (ProgressService::new(store, Clock::fixed(date(2025, 6, 1))), user.id)
    }

    #[tokio::test]
    async fn test_reaching_target_marks_completed() {
        let (service, user) = setup().await;
        // Glorification and Praise, 100 times
        let partial = service.record(user, 4, 99).await.unwrap();
        assert!(!partial.is_completed);
        assert_eq!(partial.times, 100);

        let done = service.record(user, 4, 100).await.unwrap();
        assert!(done.is_completed);

        let over = service.record(user, 4, 150).await.unwrap();
        assert!(over.is_completed);
        assert_eq!(over.completed, 150);
    }

    #[tokio::test]
    async fn test_repeated_record_updates_same_row() {
        let (service, user) = setup().await;
        service.record(user, 1, 1).await.unwrap();
        service.record(user, 1, 0).await.unwrap();

        let (day, rows) = service.for_day(user, None).await.unwrap();
        assert_eq!(day, date(2025, 6, 1));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].completed, 0);

        let (_, yesterday) = service.for_day(user, Some(date(2025, 5, 31))).await.unwrap();
        assert!(yesterday.is_empty());
    }

    #[tokio::test]
    async fn test_rejects_negative_and_unknown() {
        let (service, user) = setup().await;
        assert!(matches!(
            service.record(user, 1, -1).await,
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            service.record(user, 999, 1).await,
            Err(AppError::NotFound { .. })
        ));
    }
}
