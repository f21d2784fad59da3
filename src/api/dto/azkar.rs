//! Azkar browsing, progress, bookmark and search DTOs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Azkar, AzkarProgress, Category, CategoryWithCount};
use crate::services::{AzkarView, CategoryDetail, ProgressRecord};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    #[schema(example = "morning")]
    pub name: String,
    #[schema(example = "أذكار الصباح")]
    pub name_ar: String,
    pub description: String,
    pub description_ar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub azkar_count: Option<i64>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            name_ar: category.name_ar,
            description: category.description,
            description_ar: category.description_ar,
            azkar_count: None,
        }
    }
}

impl From<CategoryWithCount> for CategoryResponse {
    fn from(value: CategoryWithCount) -> Self {
        Self {
            azkar_count: Some(value.azkar_count),
            ..value.category.into()
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzkarResponse {
    pub id: i32,
    pub title: String,
    pub title_ar: String,
    pub arabic_text: String,
    pub translation: String,
    pub reference: Option<String>,
    /// Repetitions that complete this entry for the day
    #[schema(example = 33)]
    pub times: i32,
    pub category_id: i32,
}

impl From<Azkar> for AzkarResponse {
    fn from(azkar: Azkar) -> Self {
        Self {
            id: azkar.id,
            title: azkar.title,
            title_ar: azkar.title_ar,
            arabic_text: azkar.arabic_text,
            translation: azkar.translation,
            reference: azkar.reference,
            times: azkar.times,
            category_id: azkar.category_id,
        }
    }
}

/// An entry with the reader's state for today. All false/zero when anonymous.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AzkarItemResponse {
    #[serde(flatten)]
    pub azkar: AzkarResponse,
    pub completed_today: i32,
    pub is_completed: bool,
    pub bookmarked: bool,
}

impl From<AzkarView> for AzkarItemResponse {
    fn from(view: AzkarView) -> Self {
        Self {
            azkar: view.azkar.into(),
            completed_today: view.completed_today,
            is_completed: view.is_completed,
            bookmarked: view.bookmarked,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryDetailResponse {
    pub category: CategoryResponse,
    pub azkar: Vec<AzkarItemResponse>,
}

impl From<CategoryDetail> for CategoryDetailResponse {
    fn from(detail: CategoryDetail) -> Self {
        Self {
            category: detail.category.into(),
            azkar: detail.azkar.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRequest {
    #[validate(range(min = 1, message = "azkarId must be positive"))]
    pub azkar_id: i32,
    /// Repetitions done today, replaces any earlier value
    #[validate(range(min = 0, message = "completed must not be negative"))]
    pub completed: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub azkar_id: i32,
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub completed: i32,
    pub times: i32,
    pub is_completed: bool,
}

impl From<ProgressRecord> for ProgressResponse {
    fn from(record: ProgressRecord) -> Self {
        Self {
            azkar_id: record.azkar_id,
            date: record.date,
            completed: record.completed,
            times: record.times,
            is_completed: record.is_completed,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct ProgressQuery {
    /// Day to read, defaults to today
    #[param(value_type = Option<String>, format = Date)]
    pub date: Option<Date>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub azkar_id: i32,
    pub completed: i32,
}

impl From<AzkarProgress> for ProgressEntry {
    fn from(row: AzkarProgress) -> Self {
        Self {
            azkar_id: row.azkar_id,
            completed: row.completed,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayProgressResponse {
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub entries: Vec<ProgressEntry>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkRequest {
    #[validate(range(min = 1, message = "azkarId must be positive"))]
    pub azkar_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub azkar_id: i32,
    /// State after the toggle
    pub bookmarked: bool,
}

#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct SearchQuery {
    /// Matched against titles, text and translations, ignoring diacritics
    #[serde(default)]
    #[validate(length(max = 200, message = "Query is too long"))]
    pub q: String,
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<AzkarItemResponse>,
}
