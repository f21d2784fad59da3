//! Stores for exercising the fallback paths: one whose every call fails and
//! one that counts the calls it forwards.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jiff::civil::Date;

use crate::error::{AppError, AppResult};
use crate::models::{
    Azkar, AzkarProgress, Category, CategoryWithCount, NewAzkar, NewCategory, NewUser,
    TasbihCount, UpdateUser, User,
};
use crate::store::{AzkarStore, DynStore};

pub(crate) struct FailingStore;

fn unavailable<T>(operation: &str) -> AppResult<T> {
    Err(AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("connection refused"),
    })
}

#[async_trait]
impl AzkarStore for FailingStore {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn ping(&self) -> AppResult<()> {
        unavailable("ping")
    }

    async fn upsert_category(&self, _: &NewCategory) -> AppResult<Category> {
        unavailable("upsert category")
    }

    async fn upsert_azkar(&self, _: &NewAzkar) -> AppResult<Azkar> {
        unavailable("upsert azkar")
    }

    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>> {
        unavailable("list categories")
    }

    async fn find_category_by_name(&self, _: &str) -> AppResult<Option<Category>> {
        unavailable("find category")
    }

    async fn list_azkar_by_category(&self, _: i32) -> AppResult<Vec<Azkar>> {
        unavailable("list azkar")
    }

    async fn list_azkar(&self) -> AppResult<Vec<Azkar>> {
        unavailable("list azkar")
    }

    async fn find_azkar(&self, _: i32) -> AppResult<Option<Azkar>> {
        unavailable("find azkar")
    }

    async fn find_azkar_by_title(&self, _: &str, _: &str) -> AppResult<Option<Azkar>> {
        unavailable("find azkar")
    }

    async fn create_user(&self, _: NewUser) -> AppResult<User> {
        unavailable("create user")
    }

    async fn find_user_by_id(&self, _: i32) -> AppResult<Option<User>> {
        unavailable("find user")
    }

    async fn find_user_by_email(&self, _: &str) -> AppResult<Option<User>> {
        unavailable("find user")
    }

    async fn update_user(&self, _: i32, _: UpdateUser) -> AppResult<User> {
        unavailable("update user")
    }

    async fn upsert_progress(&self, _: i32, _: i32, _: Date, _: i32) -> AppResult<AzkarProgress> {
        unavailable("upsert progress")
    }

    async fn list_progress(&self, _: i32, _: Date, _: Date) -> AppResult<Vec<AzkarProgress>> {
        unavailable("list progress")
    }

    async fn toggle_bookmark(&self, _: i32, _: i32) -> AppResult<bool> {
        unavailable("toggle bookmark")
    }

    async fn list_bookmarks(&self, _: i32) -> AppResult<Vec<Azkar>> {
        unavailable("list bookmarks")
    }

    async fn save_tasbih_count(&self, _: i32, _: Date, _: i32) -> AppResult<TasbihCount> {
        unavailable("save tasbih count")
    }

    async fn list_tasbih_counts(&self, _: i32, _: Date, _: Date) -> AppResult<Vec<TasbihCount>> {
        unavailable("list tasbih counts")
    }
}

/// Forwards to `inner`, counting every call.
pub(crate) struct CountingStore {
    inner: DynStore,
    calls: AtomicUsize,
}

impl CountingStore {
    pub(crate) fn new(inner: DynStore) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) -> &DynStore {
        self.calls.fetch_add(1, Ordering::SeqCst);
        &self.inner
    }
}

#[async_trait]
impl AzkarStore for CountingStore {
    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    async fn ping(&self) -> AppResult<()> {
        self.tick().ping().await
    }

    async fn upsert_category(&self, category: &NewCategory) -> AppResult<Category> {
        self.tick().upsert_category(category).await
    }

    async fn upsert_azkar(&self, azkar: &NewAzkar) -> AppResult<Azkar> {
        self.tick().upsert_azkar(azkar).await
    }

    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>> {
        self.tick().list_categories().await
    }

    async fn find_category_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        self.tick().find_category_by_name(name).await
    }

    async fn list_azkar_by_category(&self, category_id: i32) -> AppResult<Vec<Azkar>> {
        self.tick().list_azkar_by_category(category_id).await
    }

    async fn list_azkar(&self) -> AppResult<Vec<Azkar>> {
        self.tick().list_azkar().await
    }

    async fn find_azkar(&self, id: i32) -> AppResult<Option<Azkar>> {
        self.tick().find_azkar(id).await
    }

    async fn find_azkar_by_title(&self, category: &str, title: &str) -> AppResult<Option<Azkar>> {
        self.tick().find_azkar_by_title(category, title).await
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        self.tick().create_user(user).await
    }

    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.tick().find_user_by_id(id).await
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.tick().find_user_by_email(email).await
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        self.tick().update_user(id, changes).await
    }

    async fn upsert_progress(
        &self,
        user_id: i32,
        azkar_id: i32,
        date: Date,
        completed: i32,
    ) -> AppResult<AzkarProgress> {
        self.tick()
            .upsert_progress(user_id, azkar_id, date, completed)
            .await
    }

    async fn list_progress(
        &self,
        user_id: i32,
        from: Date,
        to: Date,
    ) -> AppResult<Vec<AzkarProgress>> {
        self.tick().list_progress(user_id, from, to).await
    }

    async fn toggle_bookmark(&self, user_id: i32, azkar_id: i32) -> AppResult<bool> {
        self.tick().toggle_bookmark(user_id, azkar_id).await
    }

    async fn list_bookmarks(&self, user_id: i32) -> AppResult<Vec<Azkar>> {
        self.tick().list_bookmarks(user_id).await
    }

    async fn save_tasbih_count(
        &self,
        user_id: i32,
        date: Date,
        count: i32,
    ) -> AppResult<TasbihCount> {
        self.tick().save_tasbih_count(user_id, date, count).await
    }

    async fn list_tasbih_counts(
        &self,
        user_id: i32,
        from: Date,
        to: Date,
    ) -> AppResult<Vec<TasbihCount>> {
        self.tick().list_tasbih_counts(user_id, from, to).await
    }
}
