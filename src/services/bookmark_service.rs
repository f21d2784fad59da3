use crate::error::{AppError, AppResult};
use crate::models::Azkar;
use crate::store::DynStore;

#[derive(Clone)]
pub struct BookmarkService {
    store: DynStore,
}

impl BookmarkService {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }

    /// Flips the bookmark and returns whether it is now set.
    pub async fn toggle(&self, user_id: i32, azkar_id: i32) -> AppResult<bool> {
        if self.store.find_azkar(azkar_id).await?.is_none() {
            return Err(AppError::not_found("azkar", "id", azkar_id));
        }
        self.store.toggle_bookmark(user_id, azkar_id).await
    }

    pub async fn list(&self, user_id: i32) -> AppResult<Vec<Azkar>> {
        self.store.list_bookmarks(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewUser;
    use crate::store::{AzkarStore, MemoryStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
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
        let service = BookmarkService::new(store);

        assert!(service.list(user.id).await.unwrap().is_empty());
        assert!(service.toggle(user.id, 7).await.unwrap());
        assert_eq!(service.list(user.id).await.unwrap()[0].id, 7);
        assert!(!service.toggle(user.id, 7).await.unwrap());
        assert!(service.list(user.id).await.unwrap().is_empty());

        assert!(matches!(
            service.toggle(user.id, 404).await,
            Err(AppError::NotFound { .. })
        ));
    }
}
