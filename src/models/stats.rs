use jiff::civil::Date;

/// Consecutive days with at least one completed azkar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

/// Today's completion within one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryProgress {
    pub name: String,
    pub name_ar: String,
    pub total: i64,
    pub completed: i64,
}

/// One day of the activity series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyActivity {
    pub date: Date,
    pub azkar_completed: i64,
    pub tasbih: i64,
}

/// Everything the dashboard shows. `demo` marks static sample data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub demo: bool,
    pub total_azkar: i64,
    pub completed_today: i64,
    pub completion_percent: u8,
    pub categories: Vec<CategoryProgress>,
    pub tasbih_today: i64,
    pub tasbih_week: i64,
    pub tasbih_total: i64,
    pub bookmarks: i64,
    pub streak: Streak,
    pub weekly: Vec<DailyActivity>,
}
