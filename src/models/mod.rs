mod azkar;
mod bookmark;
mod category;
mod progress;
mod stats;
mod tasbih;
mod user;

pub use azkar::{Azkar, NewAzkar};
pub use bookmark::{Bookmark, NewBookmark};
pub use category::{Category, CategoryWithCount, NewCategory};
pub use progress::{AzkarProgress, NewAzkarProgress};
pub use stats::{CategoryProgress, DailyActivity, DashboardStats, Streak};
pub use tasbih::{NewTasbihCount, TasbihCount};
pub use user::{NewUser, UpdateUser, User};
