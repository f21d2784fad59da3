use std::collections::HashMap;

use crate::content::catalog;
use crate::error::AppResult;
use crate::store::AzkarStore;

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub azkar: usize,
}

/// Upserts every catalog category and entry. Safe to run on every start.
pub async fn seed(store: &dyn AzkarStore) -> AppResult<SeedSummary> {
    let mut ids = HashMap::new();
    for entry in catalog::categories() {
        let category = store.upsert_category(&entry.to_new()).await?;
        ids.insert(entry.name, category.id);
    }

    let mut azkar = 0;
    for entry in catalog::azkar() {
        let Some(&category_id) = ids.get(entry.category) else {
            tracing::warn!(
                title = entry.title,
                category = entry.category,
                "Skipping azkar with unknown category"
            );
            continue;
        };
        store.upsert_azkar(&entry.to_new(category_id)).await?;
        azkar += 1;
    }

    Ok(SeedSummary {
        categories: ids.len(),
        azkar,
    })
}
