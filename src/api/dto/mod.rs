//! Data Transfer Objects for API requests and responses.
//!
//! Field names are camelCase on the wire.

mod auth;
mod azkar;
mod dashboard;
mod error;
mod health;
mod tasbih;
mod user;

pub use auth::{AuthResponse, LoginRequest, RefreshTokenRequest, RefreshTokenResponse, RegisterRequest};
pub use azkar::{
    AzkarItemResponse, AzkarResponse, BookmarkRequest, BookmarkResponse, CategoryDetailResponse,
    CategoryResponse, DayProgressResponse, ProgressEntry, ProgressQuery, ProgressRequest,
    ProgressResponse, SearchQuery, SearchResponse,
};
pub use dashboard::{
    CategoryProgressResponse, DailyActivityResponse, DashboardStatsResponse, StreakResponse,
};
pub use error::ErrorResponse;
pub use health::{ComponentHealth, HealthResponse, HealthStatus};
pub use tasbih::{
    SaveTasbihRequest, TasbihCountResponse, TasbihCountsQuery, TasbihCountsResponse,
    TasbihPresetResponse,
};
pub use user::{UpdateProfileRequest, UserResponse};
