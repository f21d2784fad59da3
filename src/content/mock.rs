//! Catalog-backed fallbacks served when the store cannot answer.

use jiff::ToSpan;
use jiff::civil::Date;

use crate::content::catalog::{self, AzkarEntry, CategoryEntry};
use crate::models::{
    Azkar, Category, CategoryProgress, CategoryWithCount, DailyActivity, DashboardStats,
    NewAzkar, NewCategory, Streak,
};

impl CategoryEntry {
    pub fn to_model(&self, id: i32) -> Category {
        Category {
            id,
            name: self.name.to_string(),
            name_ar: self.name_ar.to_string(),
            description: self.description.to_string(),
            description_ar: self.description_ar.to_string(),
        }
    }

    pub fn to_new(&self) -> NewCategory {
        NewCategory {
            name: self.name.to_string(),
            name_ar: self.name_ar.to_string(),
            description: self.description.to_string(),
            description_ar: self.description_ar.to_string(),
        }
    }
}

impl AzkarEntry {
    pub fn to_model(&self, id: i32, category_id: i32) -> Azkar {
        Azkar {
            id,
            title: self.title.to_string(),
            title_ar: self.title_ar.to_string(),
            arabic_text: self.arabic_text.to_string(),
            translation: self.translation.to_string(),
            reference: self.reference.map(str::to_string),
            times: self.times,
            category_id,
        }
    }

    pub fn to_new(&self, category_id: i32) -> NewAzkar {
        NewAzkar {
            title: self.title.to_string(),
            title_ar: self.title_ar.to_string(),
            arabic_text: self.arabic_text.to_string(),
            translation: self.translation.to_string(),
            reference: self.reference.map(str::to_string),
            times: self.times,
            category_id,
        }
    }
}

/// All catalog categories with their entry counts.
pub fn mock_categories() -> Vec<CategoryWithCount> {
    catalog::categories()
        .iter()
        .zip(1..)
        .map(|(entry, id)| CategoryWithCount {
            category: entry.to_model(id),
            azkar_count: catalog::azkar_in(entry.name).count() as i64,
        })
        .collect()
}

/// One catalog category and its entries ordered by title.
pub fn mock_category(name: &str) -> Option<(Category, Vec<Azkar>)> {
    let (category_id, entry) = catalog::category(name)?;
    let mut azkar: Vec<Azkar> = catalog::azkar_in(name)
        .map(|(id, a)| a.to_model(id, category_id))
        .collect();
    azkar.sort_by(|a, b| a.title.cmp(&b.title));
    Some((entry.to_model(category_id), azkar))
}

/// Static sample statistics, with the activity series ending on `today`.
pub fn mock_dashboard(today: Date) -> DashboardStats {
    const COMPLETED: [i64; 7] = [4, 6, 3, 8, 5, 7, 6];
    const TASBIH: [i64; 7] = [99, 133, 33, 200, 100, 167, 100];

    let categories: Vec<CategoryProgress> = catalog::categories()
        .iter()
        .zip([3, 2, 1, 0])
        .map(|(entry, completed)| CategoryProgress {
            name: entry.name.to_string(),
            name_ar: entry.name_ar.to_string(),
            total: catalog::azkar_in(entry.name).count() as i64,
            completed,
        })
        .collect();

    let weekly = (0..7)
        .map(|i| DailyActivity {
            date: today
                .checked_sub((6 - i as i64).days())
                .unwrap_or(today),
            azkar_completed: COMPLETED[i],
            tasbih: TASBIH[i],
        })
        .collect();

    let total_azkar = catalog::azkar().len() as i64;
    let completed_today = categories.iter().map(|c| c.completed).sum::<i64>();

    DashboardStats {
        demo: true,
        total_azkar,
        completed_today,
        completion_percent: percent(completed_today, total_azkar),
        categories,
        tasbih_today: TASBIH[6],
        tasbih_week: TASBIH.iter().sum(),
        tasbih_total: 4_250,
        bookmarks: 3,
        streak: Streak {
            current: 5,
            best: 12,
        },
        weekly,
    }
}

/// `part / whole` as a whole percentage, capped at 100.
pub fn percent(part: i64, whole: i64) -> u8 {
    if whole <= 0 {
        return 0;
    }
    ((part.max(0) * 100 + whole / 2) / whole).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_mock_categories_counts_match_catalog() {
        let categories = mock_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].category.name, "morning");
        assert_eq!(categories[0].category.id, 1);
        let total: i64 = categories.iter().map(|c| c.azkar_count).sum();
        assert_eq!(total, catalog::azkar().len() as i64);
    }

    #[test]
    fn test_mock_category_is_sorted_by_title() {
        let (category, azkar) = mock_category("morning").unwrap();
        assert_eq!(category.name_ar, "أذكار الصباح");
        assert!(!azkar.is_empty());
        assert!(azkar.windows(2).all(|w| w[0].title <= w[1].title));
        assert!(azkar.iter().all(|a| a.category_id == category.id));
        assert!(mock_category("midnight").is_none());
    }

    #[test]
    fn test_mock_dashboard_is_marked_demo() {
        let today = date(2025, 3, 10);
        let stats = mock_dashboard(today);
        assert!(stats.demo);
        assert_eq!(stats.weekly.len(), 7);
        assert_eq!(stats.weekly[6].date, today);
        assert_eq!(stats.weekly[0].date, date(2025, 3, 4));
        assert_eq!(stats.tasbih_week, 832);
        assert!(stats.completion_percent <= 100);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(5, 4), 100);
    }
}
