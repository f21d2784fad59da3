use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff_diesel::ToDiesel;

use crate::content::catalog;
use crate::error::{AppError, AppResult};
use crate::models::{
    Azkar, AzkarProgress, Bookmark, Category, CategoryWithCount, NewAzkar, NewCategory, NewUser,
    TasbihCount, UpdateUser, User,
};
use crate::store::AzkarStore;

/// Process-local store keyed by each record's natural key.
///
/// The maps mirror the browser storage namespaces of the web client:
/// `azkar-users`, `azkar-user-progress`, `azkar-bookmark_*` and
/// `azkar-tasbih-counts`. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    ids: IdSequences,
    /// by name
    categories: DashMap<String, Category>,
    /// by `(category_id, title)`
    azkar: DashMap<(i32, String), Azkar>,
    /// by email
    users: DashMap<String, User>,
    /// by `(user_id, azkar_id, date)`
    progress: DashMap<(i32, i32, Date), AzkarProgress>,
    /// by `(user_id, azkar_id)`
    bookmarks: DashMap<(i32, i32), Bookmark>,
    /// by `(user_id, date)`
    tasbih: DashMap<(i32, Date), TasbihCount>,
}

#[derive(Default)]
struct IdSequences {
    category: AtomicI32,
    azkar: AtomicI32,
    user: AtomicI32,
    progress: AtomicI32,
    bookmark: AtomicI32,
    tasbih: AtomicI32,
}

fn next(seq: &AtomicI32) -> i32 {
    seq.fetch_add(1, Ordering::Relaxed) + 1
}

fn now() -> jiff_diesel::DateTime {
    Timestamp::now()
        .to_zoned(TimeZone::UTC)
        .datetime()
        .to_diesel()
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in catalog, with ids matching catalog order.
    pub fn with_catalog() -> Self {
        let store = Self::new();
        for entry in catalog::categories() {
            let category = store.put_category(&entry.to_new());
            for (_, azkar) in catalog::azkar_in(entry.name) {
                store.put_azkar(&azkar.to_new(category.id));
            }
        }
        store
    }

    fn put_category(&self, new: &NewCategory) -> Category {
        match self.categories.entry(new.name.clone()) {
            Entry::Occupied(mut occupied) => {
                let category = occupied.get_mut();
                category.name_ar = new.name_ar.clone();
                category.description = new.description.clone();
                category.description_ar = new.description_ar.clone();
                category.clone()
            }
            Entry::Vacant(vacant) => vacant
                .insert(Category {
                    id: next(&self.ids.category),
                    name: new.name.clone(),
                    name_ar: new.name_ar.clone(),
                    description: new.description.clone(),
                    description_ar: new.description_ar.clone(),
                })
                .clone(),
        }
    }

    fn put_azkar(&self, new: &NewAzkar) -> Azkar {
        let key = (new.category_id, new.title.clone());
        match self.azkar.entry(key) {
            Entry::Occupied(mut occupied) => {
                let id = occupied.get().id;
                *occupied.get_mut() = Azkar {
                    id,
                    title: new.title.clone(),
                    title_ar: new.title_ar.clone(),
                    arabic_text: new.arabic_text.clone(),
                    translation: new.translation.clone(),
                    reference: new.reference.clone(),
                    times: new.times,
                    category_id: new.category_id,
                };
                occupied.get().clone()
            }
            Entry::Vacant(vacant) => vacant
                .insert(Azkar {
                    id: next(&self.ids.azkar),
                    title: new.title.clone(),
                    title_ar: new.title_ar.clone(),
                    arabic_text: new.arabic_text.clone(),
                    translation: new.translation.clone(),
                    reference: new.reference.clone(),
                    times: new.times,
                    category_id: new.category_id,
                })
                .clone(),
        }
    }

    fn category_exists(&self, id: i32) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    fn azkar_by_id(&self, id: i32) -> Option<Azkar> {
        self.azkar
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.value().clone())
    }

    fn require_user(&self, id: i32) -> AppResult<()> {
        if self.users.iter().any(|u| u.id == id) {
            Ok(())
        } else {
            Err(AppError::validation(
                "user_id",
                format!("Referenced record '{}' does not exist", id),
            ))
        }
    }

    fn require_azkar(&self, id: i32) -> AppResult<()> {
        if self.azkar.iter().any(|a| a.id == id) {
            Ok(())
        } else {
            Err(AppError::validation(
                "azkar_id",
                format!("Referenced record '{}' does not exist", id),
            ))
        }
    }
}

#[async_trait]
impl AzkarStore for MemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn upsert_category(&self, category: &NewCategory) -> AppResult<Category> {
        Ok(self.put_category(category))
    }

    async fn upsert_azkar(&self, azkar: &NewAzkar) -> AppResult<Azkar> {
        if azkar.times < 1 {
            return Err(AppError::validation(
                "times",
                "Value rejected by azkar check constraint",
            ));
        }
        if !self.category_exists(azkar.category_id) {
            return Err(AppError::validation(
                "category_id",
                format!("Referenced record '{}' does not exist", azkar.category_id),
            ));
        }
        Ok(self.put_azkar(azkar))
    }

    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>> {
        let mut categories: Vec<CategoryWithCount> = self
            .categories
            .iter()
            .map(|c| CategoryWithCount {
                azkar_count: self.azkar.iter().filter(|a| a.category_id == c.id).count() as i64,
                category: c.value().clone(),
            })
            .collect();
        categories.sort_by_key(|c| c.category.id);
        Ok(categories)
    }

    async fn find_category_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        Ok(self.categories.get(name).map(|c| c.value().clone()))
    }

    async fn list_azkar_by_category(&self, category_id: i32) -> AppResult<Vec<Azkar>> {
        let mut azkar: Vec<Azkar> = self
            .azkar
            .iter()
            .filter(|a| a.category_id == category_id)
            .map(|a| a.value().clone())
            .collect();
        azkar.sort_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)));
        Ok(azkar)
    }

    async fn list_azkar(&self) -> AppResult<Vec<Azkar>> {
        let mut azkar: Vec<Azkar> = self.azkar.iter().map(|a| a.value().clone()).collect();
        azkar.sort_by_key(|a| a.id);
        Ok(azkar)
    }

    async fn find_azkar(&self, id: i32) -> AppResult<Option<Azkar>> {
        Ok(self.azkar_by_id(id))
    }

    async fn find_azkar_by_title(
        &self,
        category: &str,
        title: &str,
    ) -> AppResult<Option<Azkar>> {
        let Some(category_id) = self.categories.get(category).map(|c| c.id) else {
            return Ok(None);
        };
        Ok(self
            .azkar
            .get(&(category_id, title.to_string()))
            .map(|a| a.value().clone()))
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        match self.users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::Duplicate {
                entity: "users".to_string(),
                field: "email".to_string(),
                value: user.email,
            }),
            Entry::Vacant(vacant) => {
                let stamp = now();
                Ok(vacant
                    .insert(User {
                        id: next(&self.ids.user),
                        name: user.name,
                        email: user.email,
                        password: user.password,
                        avatar: user.avatar,
                        created_at: stamp,
                        updated_at: stamp,
                    })
                    .clone())
            }
        }
    }

    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.value().clone()))
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.users.get(email).map(|u| u.value().clone()))
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        let email = self
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.key().clone())
            .ok_or_else(|| AppError::not_found("user", "id", id))?;
        let mut user = self
            .users
            .get_mut(&email)
            .ok_or_else(|| AppError::not_found("user", "id", id))?;

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(avatar) = changes.avatar {
            user.avatar = avatar;
        }
        user.updated_at = now();
        Ok(user.clone())
    }

    async fn upsert_progress(
        &self,
        user_id: i32,
        azkar_id: i32,
        date: Date,
        completed: i32,
    ) -> AppResult<AzkarProgress> {
        if completed < 0 {
            return Err(AppError::validation(
                "completed",
                "Value rejected by azkar_progress check constraint",
            ));
        }
        self.require_user(user_id)?;
        self.require_azkar(azkar_id)?;

        let stamp = now();
        let row = match self.progress.entry((user_id, azkar_id, date)) {
            Entry::Occupied(mut occupied) => {
                let row = occupied.get_mut();
                row.completed = completed;
                row.updated_at = stamp;
                row.clone()
            }
            Entry::Vacant(vacant) => vacant
                .insert(AzkarProgress {
                    id: next(&self.ids.progress),
                    user_id,
                    azkar_id,
                    date: date.to_diesel(),
                    completed,
                    created_at: stamp,
                    updated_at: stamp,
                })
                .clone(),
        };
        Ok(row)
    }

    async fn list_progress(
        &self,
        user_id: i32,
        from: Date,
        to: Date,
    ) -> AppResult<Vec<AzkarProgress>> {
        let mut rows: Vec<AzkarProgress> = self
            .progress
            .iter()
            .filter(|e| {
                let (owner, _, date) = *e.key();
                owner == user_id && from <= date && date <= to
            })
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|r| (r.date.to_jiff(), r.azkar_id));
        Ok(rows)
    }

    async fn toggle_bookmark(&self, user_id: i32, azkar_id: i32) -> AppResult<bool> {
        self.require_user(user_id)?;
        self.require_azkar(azkar_id)?;

        match self.bookmarks.entry((user_id, azkar_id)) {
            Entry::Occupied(occupied) => {
                occupied.remove();
                Ok(false)
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Bookmark {
                    id: next(&self.ids.bookmark),
                    user_id,
                    azkar_id,
                    created_at: now(),
                });
                Ok(true)
            }
        }
    }

    async fn list_bookmarks(&self, user_id: i32) -> AppResult<Vec<Azkar>> {
        let mut marked: Vec<(i32, i32)> = self
            .bookmarks
            .iter()
            .filter(|b| b.user_id == user_id)
            .map(|b| (b.id, b.azkar_id))
            .collect();
        // Ids grow monotonically, so the highest id is the latest bookmark
        marked.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(marked
            .into_iter()
            .filter_map(|(_, azkar_id)| self.azkar_by_id(azkar_id))
            .collect())
    }

    async fn save_tasbih_count(
        &self,
        user_id: i32,
        date: Date,
        count: i32,
    ) -> AppResult<TasbihCount> {
        if count < 0 {
            return Err(AppError::validation(
                "count",
                "Value rejected by tasbih_counts check constraint",
            ));
        }
        self.require_user(user_id)?;

        let stamp = now();
        let row = match self.tasbih.entry((user_id, date)) {
            Entry::Occupied(mut occupied) => {
                let row = occupied.get_mut();
                row.count = count;
                row.updated_at = stamp;
                row.clone()
            }
            Entry::Vacant(vacant) => vacant
                .insert(TasbihCount {
                    id: next(&self.ids.tasbih),
                    user_id,
                    date: date.to_diesel(),
                    count,
                    created_at: stamp,
                    updated_at: stamp,
                })
                .clone(),
        };
        Ok(row)
    }

    async fn list_tasbih_counts(
        &self,
        user_id: i32,
        from: Date,
        to: Date,
    ) -> AppResult<Vec<TasbihCount>> {
        let mut rows: Vec<TasbihCount> = self
            .tasbih
            .iter()
            .filter(|e| {
                let (owner, date) = *e.key();
                owner == user_id && from <= date && date <= to
            })
            .map(|e| e.value().clone())
            .collect();
        rows.sort_by_key(|r| std::cmp::Reverse(r.date.to_jiff()));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    async fn store_with_user() -> (MemoryStore, User) {
        let store = MemoryStore::with_catalog();
        let user = store
            .create_user(NewUser {
                name: "Amina".to_string(),
                email: "amina@example.com".to_string(),
                password: "hash".to_string(),
                avatar: None,
            })
            .await
            .unwrap();
        (store, user)
    }

    #[tokio::test]
    async fn test_catalog_ids_follow_catalog_order() {
        let store = MemoryStore::with_catalog();
        let categories = store.list_categories().await.unwrap();
        let names: Vec<&str> = categories.iter().map(|c| c.category.name.as_str()).collect();
        assert_eq!(names, vec!["morning", "evening", "prayer", "general"]);

        let all = store.list_azkar().await.unwrap();
        assert_eq!(all.len(), catalog::azkar().len());
        assert_eq!(all[0].title, "Ayat al-Kursi");
        assert_eq!(all[0].id, 1);
    }

    #[tokio::test]
    async fn test_upserts_are_idempotent() {
        let store = MemoryStore::with_catalog();
        let before = store.list_azkar().await.unwrap().len();

        let entry = &catalog::azkar()[0];
        let again = store.upsert_azkar(&entry.to_new(1)).await.unwrap();
        assert_eq!(again.id, 1);
        assert_eq!(store.list_azkar().await.unwrap().len(), before);

        let category = store
            .upsert_category(&catalog::categories()[0].to_new())
            .await
            .unwrap();
        assert_eq!(category.id, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let (store, _) = store_with_user().await;
        let err = store
            .create_user(NewUser {
                name: "Other".to_string(),
                email: "amina@example.com".to_string(),
                password: "hash".to_string(),
                avatar: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_progress_upsert_overwrites() {
        let (store, user) = store_with_user().await;
        let day = date(2025, 5, 1);

        let first = store.upsert_progress(user.id, 1, day, 1).await.unwrap();
        let second = store.upsert_progress(user.id, 1, day, 3).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.completed, 3);

        let rows = store.list_progress(user.id, day, day).await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_progress_requires_known_references() {
        let (store, user) = store_with_user().await;
        let day = date(2025, 5, 1);
        assert!(store.upsert_progress(user.id, 999, day, 1).await.is_err());
        assert!(store.upsert_progress(999, 1, day, 1).await.is_err());
        assert!(store.upsert_progress(user.id, 1, day, -1).await.is_err());
    }

    #[tokio::test]
    async fn test_bookmark_toggle_round_trip() {
        let (store, user) = store_with_user().await;
        assert!(store.toggle_bookmark(user.id, 2).await.unwrap());
        assert!(store.toggle_bookmark(user.id, 5).await.unwrap());

        let listed = store.list_bookmarks(user.id).await.unwrap();
        assert_eq!(listed.iter().map(|a| a.id).collect::<Vec<_>>(), vec![5, 2]);

        assert!(!store.toggle_bookmark(user.id, 2).await.unwrap());
        assert_eq!(store.list_bookmarks(user.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_tasbih_range_is_newest_first() {
        let (store, user) = store_with_user().await;
        for (day, count) in [(1, 10), (3, 30), (2, 20), (9, 90)] {
            store
                .save_tasbih_count(user.id, date(2025, 1, day), count)
                .await
                .unwrap();
        }
        store
            .save_tasbih_count(user.id, date(2025, 1, 2), 25)
            .await
            .unwrap();

        let rows = store
            .list_tasbih_counts(user.id, date(2025, 1, 1), date(2025, 1, 5))
            .await
            .unwrap();
        let counts: Vec<i32> = rows.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![30, 25, 10]);
    }

    #[tokio::test]
    async fn test_update_user_changes_only_given_fields() {
        let (store, user) = store_with_user().await;
        let updated = store
            .update_user(
                user.id,
                UpdateUser {
                    name: None,
                    avatar: Some(Some("https://img.example/a.png".to_string())),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Amina");
        assert_eq!(updated.avatar.as_deref(), Some("https://img.example/a.png"));

        assert!(matches!(
            store.update_user(999, UpdateUser::default()).await,
            Err(AppError::NotFound { .. })
        ));
    }
}
