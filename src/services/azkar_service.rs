//! Category browsing with per-user completion and bookmark state.

use std::collections::{HashMap, HashSet};

use jiff::civil::Date;

use crate::content::mock;
use crate::error::{AppError, AppResult};
use crate::models::{Azkar, Category, CategoryWithCount};
use crate::services::Clock;
use crate::store::DynStore;

/// An entry as seen by one reader today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzkarView {
    pub azkar: Azkar,
    pub completed_today: i32,
    pub is_completed: bool,
    pub bookmarked: bool,
}

impl AzkarView {
    pub(crate) fn anonymous(azkar: Azkar) -> Self {
        Self {
            azkar,
            completed_today: 0,
            is_completed: false,
            bookmarked: false,
        }
    }
}

/// One user's progress and bookmarks for a single day.
pub(crate) struct UserDay {
    completed: HashMap<i32, i32>,
    bookmarked: HashSet<i32>,
}

impl UserDay {
    pub(crate) async fn load(store: &DynStore, user_id: i32, day: Date) -> AppResult<Self> {
        let completed = store
            .list_progress(user_id, day, day)
            .await?
            .into_iter()
            .map(|p| (p.azkar_id, p.completed))
            .collect();
        let bookmarked = store
            .list_bookmarks(user_id)
            .await?
            .into_iter()
            .map(|a| a.id)
            .collect();
        Ok(Self {
            completed,
            bookmarked,
        })
    }

    pub(crate) fn view(&self, azkar: Azkar) -> AzkarView {
        let done = self.completed.get(&azkar.id).copied().unwrap_or(0);
        AzkarView {
            completed_today: done,
            is_completed: done >= azkar.times,
            bookmarked: self.bookmarked.contains(&azkar.id),
            azkar,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDetail {
    pub category: Category,
    pub azkar: Vec<AzkarView>,
}

#[derive(Clone)]
pub struct AzkarService {
    store: DynStore,
    clock: Clock,
}

impl AzkarService {
    pub fn new(store: DynStore, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// All categories with entry counts, from the catalog if the store fails.
    pub async fn list_categories(&self) -> Vec<CategoryWithCount> {
        match self.store.list_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                tracing::warn!(error = %e, "Listing categories failed, serving catalog");
                mock::mock_categories()
            }
        }
    }

    /// One category with its entries ordered by title. With a `user_id` each
    /// entry carries today's progress and bookmark state.
    pub async fn get_category(&self, name: &str, user_id: Option<i32>) -> AppResult<CategoryDetail> {
        match self.load_category(name, user_id).await {
            Err(e) if e.is_storage_failure() => {
                tracing::warn!(error = %e, category = name, "Loading category failed, serving catalog");
                let (category, azkar) =
                    mock::mock_category(name).ok_or_else(|| AppError::not_found("category", "name", name))?;
                Ok(CategoryDetail {
                    category,
                    azkar: azkar.into_iter().map(AzkarView::anonymous).collect(),
                })
            }
            other => other,
        }
    }

    async fn load_category(&self, name: &str, user_id: Option<i32>) -> AppResult<CategoryDetail> {
        let category = self
            .store
            .find_category_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("category", "name", name))?;
        let azkar = self.store.list_azkar_by_category(category.id).await?;

        let Some(user_id) = user_id else {
            return Ok(CategoryDetail {
                category,
                azkar: azkar.into_iter().map(AzkarView::anonymous).collect(),
            });
        };

        let day = UserDay::load(&self.store, user_id, self.clock.today()).await?;
        let azkar = azkar.into_iter().map(|azkar| day.view(azkar)).collect();

        Ok(CategoryDetail { category, azkar })
    }
}
