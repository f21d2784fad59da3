use std::collections::HashMap;

use super::azkar_service::{AzkarView, UserDay};
use crate::content::catalog;
use crate::content::search::{self, SearchHit};
use crate::error::AppResult;
use crate::models::Azkar;
use crate::services::Clock;
use crate::store::DynStore;

/// Searches the built-in catalog. Anonymous callers get catalog rows as they
/// are; signed-in callers get stored rows so ids line up with their progress
/// and bookmarks.
#[derive(Clone)]
pub struct SearchService {
    store: DynStore,
    clock: Clock,
}

impl SearchService {
    pub fn new(store: DynStore, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Hits in catalog order. With a `user_id` each hit carries today's
    /// progress and bookmark state; a store failure only costs the
    /// annotations.
    pub async fn search(
        &self,
        query: &str,
        limit: Option<usize>,
        user_id: Option<i32>,
    ) -> Vec<AzkarView> {
        let hits = search::search(query, limit);
        let user_id = match user_id {
            Some(user_id) if !hits.is_empty() => user_id,
            _ => return anonymous(hits),
        };

        let (stored, day) = match self.load_user_state(user_id).await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(error = %e, user_id, "Loading user state for search failed");
                return anonymous(hits);
            }
        };

        hits.into_iter()
            .map(|hit| {
                let azkar = stored
                    .get(&(hit.entry.category, hit.entry.title))
                    .cloned()
                    .unwrap_or_else(|| from_catalog(hit));
                day.view(azkar)
            })
            .collect()
    }

    /// Stored azkar keyed by `(category name, title)` plus today's state.
    async fn load_user_state(
        &self,
        user_id: i32,
    ) -> AppResult<(HashMap<(&'static str, &'static str), Azkar>, UserDay)> {
        let categories: HashMap<i32, String> = self
            .store
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.category.id, c.category.name))
            .collect();

        let mut stored = HashMap::new();
        for azkar in self.store.list_azkar().await? {
            let key = categories
                .get(&azkar.category_id)
                .and_then(|name| catalog_key(name, &azkar.title));
            if let Some(key) = key {
                stored.insert(key, azkar);
            }
        }

        let day = UserDay::load(&self.store, user_id, self.clock.today()).await?;
        Ok((stored, day))
    }
}

fn anonymous(hits: Vec<SearchHit>) -> Vec<AzkarView> {
    hits.into_iter()
        .map(|hit| AzkarView::anonymous(from_catalog(hit)))
        .collect()
}

fn from_catalog(hit: SearchHit) -> Azkar {
    let category_id = catalog::category(hit.entry.category)
        .map(|(id, _)| id)
        .unwrap_or_default();
    hit.entry.to_model(hit.id, category_id)
}

/// Stored rows outside the catalog can never be search hits.
fn catalog_key(category: &str, title: &str) -> Option<(&'static str, &'static str)> {
    catalog::azkar()
        .iter()
        .find(|entry| entry.category == category && entry.title == title)
        .map(|entry| (entry.category, entry.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use crate::store::testing::{CountingStore, FailingStore};
    use crate::store::{AzkarStore, MemoryStore};
    use jiff::civil::date;
    use std::sync::Arc;

    fn clock() -> Clock {
        Clock::fixed(date(2025, 4, 2))
    }

    #[tokio::test]
    async fn test_diacritics_insensitive_search() {
        let service = SearchService::new(Arc::new(MemoryStore::with_catalog()), clock());
        let results = service.search("سبحان", None, None).await;
        assert!(!results.is_empty());
        assert!(results.iter().any(|v| v.azkar.title == "Glorification and Praise"));
        assert!(results.iter().all(|v| v.azkar.id > 0 && v.azkar.category_id > 0));
        assert!(results.iter().all(|v| !v.bookmarked && v.completed_today == 0));
    }

    #[tokio::test]
    async fn test_blank_query_is_empty() {
        let service = SearchService::new(Arc::new(MemoryStore::with_catalog()), clock());
        assert!(service.search("   ", None, Some(1)).await.is_empty());
    }

    #[tokio::test]
    async fn test_hits_carry_user_state() {
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
        // Ayat al-Kursi
        store.upsert_progress(user.id, 1, date(2025, 4, 2), 1).await.unwrap();
        store.toggle_bookmark(user.id, 1).await.unwrap();

        let service = SearchService::new(store, clock());
        let results = service.search("kursi", None, Some(user.id)).await;
        assert_eq!(results.len(), 1);
        assert!(results[0].bookmarked);
        assert_eq!(results[0].completed_today, 1);
        assert!(results[0].is_completed);
    }

    #[tokio::test]
    async fn test_failing_store_still_answers() {
        let service = SearchService::new(Arc::new(FailingStore), clock());
        let results = service.search("forgiveness", Some(1), Some(7)).await;
        assert_eq!(results.len(), 1);
        assert!(!results[0].bookmarked);
    }

    #[tokio::test]
    async fn test_anonymous_search_stays_off_the_store() {
        let store = Arc::new(CountingStore::new(Arc::new(MemoryStore::with_catalog())));
        let service = SearchService::new(store.clone(), clock());
        let results = service.search("allah", Some(100), None).await;
        assert!(results.len() > 1);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_signed_in_search_reads_the_store_once() {
        let store = Arc::new(CountingStore::new(Arc::new(MemoryStore::with_catalog())));
        let service = SearchService::new(store.clone(), clock());
        let results = service.search("allah", Some(100), Some(1)).await;
        assert!(results.len() > 1);
        // categories, azkar, progress, bookmarks
        assert_eq!(store.calls(), 4);
    }

    #[tokio::test]
    async fn test_store_failure_stops_after_first_call() {
        let store = Arc::new(CountingStore::new(Arc::new(FailingStore)));
        let service = SearchService::new(store.clone(), clock());
        let results = service.search("allah", Some(100), Some(1)).await;
        assert!(results.len() > 1);
        assert!(results.iter().all(|v| !v.bookmarked && v.completed_today == 0));
        assert_eq!(store.calls(), 1);
    }
}
