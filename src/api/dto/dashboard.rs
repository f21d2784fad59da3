use jiff::civil::Date;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{CategoryProgress, DailyActivity, DashboardStats, Streak};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProgressResponse {
    pub name: String,
    pub name_ar: String,
    pub total: i64,
    pub completed: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivityResponse {
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub azkar_completed: i64,
    pub tasbih: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StreakResponse {
    /// Consecutive active days ending today or yesterday
    pub current: u32,
    pub best: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    /// True when the numbers are sample data rather than the caller's own
    pub demo: bool,
    pub total_azkar: i64,
    pub completed_today: i64,
    #[schema(maximum = 100)]
    pub completion_percent: u8,
    pub categories: Vec<CategoryProgressResponse>,
    pub tasbih_today: i64,
    pub tasbih_week: i64,
    pub tasbih_total: i64,
    pub bookmarks: i64,
    pub streak: StreakResponse,
    /// Oldest day first, ending today
    pub weekly: Vec<DailyActivityResponse>,
}

impl From<CategoryProgress> for CategoryProgressResponse {
    fn from(value: CategoryProgress) -> Self {
        Self {
            name: value.name,
            name_ar: value.name_ar,
            total: value.total,
            completed: value.completed,
        }
    }
}

impl From<DailyActivity> for DailyActivityResponse {
    fn from(value: DailyActivity) -> Self {
        Self {
            date: value.date,
            azkar_completed: value.azkar_completed,
            tasbih: value.tasbih,
        }
    }
}

impl From<Streak> for StreakResponse {
    fn from(value: Streak) -> Self {
        Self {
            current: value.current,
            best: value.best,
        }
    }
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            demo: stats.demo,
            total_azkar: stats.total_azkar,
            completed_today: stats.completed_today,
            completion_percent: stats.completion_percent,
            categories: stats.categories.into_iter().map(Into::into).collect(),
            tasbih_today: stats.tasbih_today,
            tasbih_week: stats.tasbih_week,
            tasbih_total: stats.tasbih_total,
            bookmarks: stats.bookmarks,
            streak: stats.streak.into(),
            weekly: stats.weekly.into_iter().map(Into::into).collect(),
        }
    }
}
