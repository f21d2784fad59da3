use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::content::catalog::TasbihPreset;
use crate::models::TasbihCount;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SaveTasbihRequest {
    /// Total taps for the day, replaces any earlier value
    #[validate(range(min = 0, message = "count must not be negative"))]
    #[schema(example = 99)]
    pub count: i32,
    /// Defaults to today; future days are rejected
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<Date>,
}

#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct TasbihCountsQuery {
    /// How many days back, today included
    #[validate(range(min = 1, max = 365, message = "days must be between 1 and 365"))]
    #[param(minimum = 1, maximum = 365)]
    pub days: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TasbihCountResponse {
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub count: i32,
}

impl From<TasbihCount> for TasbihCountResponse {
    fn from(row: TasbihCount) -> Self {
        Self {
            date: row.date.to_jiff(),
            count: row.count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TasbihCountsResponse {
    pub days: i64,
    pub total: i64,
    /// Newest first; days without taps are absent
    pub counts: Vec<TasbihCountResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TasbihPresetResponse {
    pub phrase: String,
    pub transliteration: String,
    pub translation: String,
    pub target: i32,
}

impl From<&TasbihPreset> for TasbihPresetResponse {
    fn from(preset: &TasbihPreset) -> Self {
        Self {
            phrase: preset.phrase.to_string(),
            transliteration: preset.transliteration.to_string(),
            translation: preset.translation.to_string(),
            target: preset.target,
        }
    }
}
