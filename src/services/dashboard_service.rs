//! Dashboard statistics.
//!
//! Everything is a fold over at most a year of one user's rows. An entry
//! counts as completed on a day when that day's count reaches its `times`.

use std::collections::{BTreeSet, HashMap};

use jiff::ToSpan;
use jiff::civil::Date;

use crate::content::mock::{self, percent};
use crate::error::AppResult;
use crate::models::{
    Azkar, AzkarProgress, CategoryProgress, CategoryWithCount, DailyActivity, DashboardStats,
    Streak, TasbihCount,
};
use crate::services::Clock;
use crate::store::DynStore;

/// How far back tasbih totals and streaks look.
const HISTORY_DAYS: i64 = 365;
const WEEK_DAYS: i64 = 7;

#[derive(Clone)]
pub struct DashboardService {
    store: DynStore,
    clock: Clock,
}

/// Rows the aggregation works from.
#[derive(Debug, Default)]
pub struct DashboardInputs {
    pub categories: Vec<CategoryWithCount>,
    pub azkar: Vec<Azkar>,
    pub progress: Vec<AzkarProgress>,
    pub tasbih: Vec<TasbihCount>,
    pub bookmarks: usize,
}

impl DashboardService {
    pub fn new(store: DynStore, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Real statistics for a signed-in user; sample data marked `demo`
    /// for anonymous callers or when the store fails.
    pub async fn stats(&self, user_id: Option<i32>) -> DashboardStats {
        let today = self.clock.today();
        let Some(user_id) = user_id else {
            return mock::mock_dashboard(today);
        };

        match self.load(user_id, today).await {
            Ok(inputs) => aggregate(today, &inputs),
            Err(e) => {
                tracing::warn!(error = %e, user_id, "Loading dashboard failed, serving demo stats");
                mock::mock_dashboard(today)
            }
        }
    }

    async fn load(&self, user_id: i32, today: Date) -> AppResult<DashboardInputs> {
        let from = history_start(today);
        Ok(DashboardInputs {
            categories: self.store.list_categories().await?,
            azkar: self.store.list_azkar().await?,
            progress: self.store.list_progress(user_id, from, today).await?,
            tasbih: self.store.list_tasbih_counts(user_id, from, today).await?,
            bookmarks: self.store.list_bookmarks(user_id).await?.len(),
        })
    }
}

fn history_start(today: Date) -> Date {
    today
        .checked_sub((HISTORY_DAYS - 1).days())
        .unwrap_or(Date::MIN)
}

pub fn aggregate(today: Date, inputs: &DashboardInputs) -> DashboardStats {
    let azkar: HashMap<i32, &Azkar> = inputs.azkar.iter().map(|a| (a.id, a)).collect();

    // (date, azkar_id) for every entry that reached its target
    let completions: Vec<(Date, i32)> = inputs
        .progress
        .iter()
        .filter(|p| {
            azkar
                .get(&p.azkar_id)
                .is_some_and(|a| p.completed >= a.times)
        })
        .map(|p| (p.date.to_jiff(), p.azkar_id))
        .collect();

    let mut completed_per_day: HashMap<Date, i64> = HashMap::new();
    for (date, _) in &completions {
        *completed_per_day.entry(*date).or_default() += 1;
    }

    let mut tasbih_per_day: HashMap<Date, i64> = HashMap::new();
    for row in &inputs.tasbih {
        *tasbih_per_day.entry(row.date.to_jiff()).or_default() += i64::from(row.count);
    }

    let mut completed_today_by_category: HashMap<i32, i64> = HashMap::new();
    for (_, azkar_id) in completions.iter().filter(|(d, _)| *d == today) {
        if let Some(a) = azkar.get(azkar_id) {
            *completed_today_by_category.entry(a.category_id).or_default() += 1;
        }
    }

    let categories: Vec<CategoryProgress> = inputs
        .categories
        .iter()
        .map(|c| CategoryProgress {
            name: c.category.name.clone(),
            name_ar: c.category.name_ar.clone(),
            total: c.azkar_count,
            completed: completed_today_by_category
                .get(&c.category.id)
                .copied()
                .unwrap_or(0),
        })
        .collect();

    let weekly: Vec<DailyActivity> = (0..WEEK_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub(back.days()).ok())
        .map(|date| DailyActivity {
            date,
            azkar_completed: completed_per_day.get(&date).copied().unwrap_or(0),
            tasbih: tasbih_per_day.get(&date).copied().unwrap_or(0),
        })
        .collect();

    let total_azkar = inputs.azkar.len() as i64;
    let completed_today = completed_per_day.get(&today).copied().unwrap_or(0);
    let active_days: BTreeSet<Date> = completed_per_day.keys().copied().collect();

    DashboardStats {
        demo: false,
        total_azkar,
        completed_today,
        completion_percent: percent(completed_today, total_azkar),
        categories,
        tasbih_today: tasbih_per_day.get(&today).copied().unwrap_or(0),
        tasbih_week: weekly.iter().map(|d| d.tasbih).sum(),
        tasbih_total: tasbih_per_day.values().sum(),
        bookmarks: inputs.bookmarks as i64,
        streak: streak(today, &active_days),
        weekly,
    }
}

/// Current and best runs of consecutive active days.
///
/// The current run may end today or yesterday, so a streak survives until
/// the day is over.
pub fn streak(today: Date, active_days: &BTreeSet<Date>) -> Streak {
    let yesterday = today.yesterday().ok();
    let start = if active_days.contains(&today) {
        Some(today)
    } else {
        yesterday.filter(|d| active_days.contains(d))
    };

    let mut current = 0u32;
    let mut cursor = start;
    while let Some(day) = cursor.filter(|d| active_days.contains(d)) {
        current += 1;
        cursor = day.yesterday().ok();
    }

    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<Date> = None;
    for &day in active_days.iter().filter(|d| **d <= today) {
        run = match previous.and_then(|p| p.tomorrow().ok()) {
            Some(next) if next == day => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }

    Streak {
        current,
        best: best.max(current),
    }
}
