use async_trait::async_trait;
use diesel_async::RunQueryDsl;
use jiff::civil::Date;
use jiff_diesel::ToDiesel;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    Azkar, AzkarProgress, Category, CategoryWithCount, NewAzkar, NewAzkarProgress, NewBookmark,
    NewCategory, NewTasbihCount, NewUser, TasbihCount, UpdateUser, User,
};
use crate::repositories::Repositories;
use crate::store::AzkarStore;

/// PostgreSQL backend, a thin adapter over [`Repositories`]
#[derive(Clone)]
pub struct PgStore {
    repos: Repositories,
}

impl PgStore {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            repos: Repositories::new(pool),
        }
    }
}

#[async_trait]
impl AzkarStore for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.repos.pool().get().await?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(AppError::from)
    }

    async fn upsert_category(&self, category: &NewCategory) -> AppResult<Category> {
        self.repos.categories.upsert(category).await
    }

    async fn upsert_azkar(&self, azkar: &NewAzkar) -> AppResult<Azkar> {
        self.repos.azkar.upsert(azkar).await
    }

    async fn list_categories(&self) -> AppResult<Vec<CategoryWithCount>> {
        self.repos.categories.list_with_counts().await
    }

    async fn find_category_by_name(&self, name: &str) -> AppResult<Option<Category>> {
        self.repos.categories.find_by_name(name).await
    }

    async fn list_azkar_by_category(&self, category_id: i32) -> AppResult<Vec<Azkar>> {
        self.repos.azkar.list_by_category(category_id).await
    }

    async fn list_azkar(&self) -> AppResult<Vec<Azkar>> {
        self.repos.azkar.list_all().await
    }

    async fn find_azkar(&self, id: i32) -> AppResult<Option<Azkar>> {
        self.repos.azkar.find_by_id(id).await
    }

    async fn find_azkar_by_title(
        &self,
        category: &str,
        title: &str,
    ) -> AppResult<Option<Azkar>> {
        self.repos.azkar.find_by_title(category, title).await
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        self.repos.users.create(user).await
    }

    async fn find_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.repos.users.find_by_id(id).await
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repos.users.find_by_email(email).await
    }

    async fn update_user(&self, id: i32, changes: UpdateUser) -> AppResult<User> {
        self.repos.users.update(id, changes).await
    }

    async fn upsert_progress(
        &self,
        user_id: i32,
        azkar_id: i32,
        date: Date,
        completed: i32,
    ) -> AppResult<AzkarProgress> {
        self.repos
            .progress
            .upsert(&NewAzkarProgress {
                user_id,
                azkar_id,
                date: date.to_diesel(),
                completed,
            })
            .await
    }

    async fn list_progress(
        &self,
        user_id: i32,
        from: Date,
        to: Date,
    ) -> AppResult<Vec<AzkarProgress>> {
        self.repos.progress.list_for_user(user_id, from, to).await
    }

    async fn toggle_bookmark(&self, user_id: i32, azkar_id: i32) -> AppResult<bool> {
        self.repos
            .bookmarks
            .toggle(NewBookmark { user_id, azkar_id })
            .await
    }

    async fn list_bookmarks(&self, user_id: i32) -> AppResult<Vec<Azkar>> {
        self.repos.bookmarks.list_for_user(user_id).await
    }

    async fn save_tasbih_count(
        &self,
        user_id: i32,
        date: Date,
        count: i32,
    ) -> AppResult<TasbihCount> {
        self.repos
            .tasbih
            .upsert(&NewTasbihCount {
                user_id,
                date: date.to_diesel(),
                count,
            })
            .await
    }

    async fn list_tasbih_counts(
        &self,
        user_id: i32,
        from: Date,
        to: Date,
    ) -> AppResult<Vec<TasbihCount>> {
        self.repos.tasbih.list_for_user(user_id, from, to).await
    }
}
