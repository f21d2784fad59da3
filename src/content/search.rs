//! Linear search over the catalog.

use crate::content::catalog::{self, AzkarEntry};
use crate::content::normalize::normalize;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// A catalog entry that matched a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i32,
    pub entry: &'static AzkarEntry,
}

/// Returns catalog entries whose title, Arabic title, text, translation or
/// category name contains `query` after normalization. Blank queries match
/// nothing. `limit` is clamped to `1..=MAX_LIMIT`.
pub fn search(query: &str, limit: Option<usize>) -> Vec<SearchHit> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    catalog::azkar()
        .iter()
        .zip(1..)
        .filter(|(entry, _)| matches(entry, &needle))
        .take(limit)
        .map(|(entry, id)| SearchHit { id, entry })
        .collect()
}

fn matches(entry: &AzkarEntry, needle: &str) -> bool {
    [
        entry.title,
        entry.title_ar,
        entry.arabic_text,
        entry.translation,
        entry.category,
    ]
    .iter()
    .any(|field| normalize(field).contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(hits: &[SearchHit]) -> Vec<&'static str> {
        hits.iter().map(|h| h.entry.title).collect()
    }

    #[test]
    fn test_undiacritized_query_matches_vocalized_text() {
        let hits = search("سبحان", None);
        assert_eq!(
            titles(&hits),
            vec![
                "Glorification and Praise",
                "Tasbih After Prayer",
                "Two Beloved Words"
            ]
        );
    }

    #[test]
    fn test_vocalized_query_matches_too() {
        assert_eq!(search("سُبْحَانَ", None), search("سبحان", None));
    }

    #[test]
    fn test_english_search_is_case_insensitive() {
        let hits = search("KURSI", None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_category_name_matches_every_entry_of_it() {
        let hits = search("evening", None);
        assert!(hits.len() >= 4);
        assert!(hits.iter().all(|h| h.entry.category == "evening"
            || h.entry.title.to_lowercase().contains("evening")
            || h.entry.translation.to_lowercase().contains("evening")));
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        assert!(search("", None).is_empty());
        assert!(search("   ", None).is_empty());
        assert!(search("\u{064E}", None).is_empty());
    }

    #[test]
    fn test_limit_is_applied_and_clamped() {
        assert_eq!(search("allah", Some(2)).len(), 2);
        assert_eq!(search("allah", Some(0)).len(), 1);
        assert!(search("allah", Some(10_000)).len() <= MAX_LIMIT);
    }

    #[test]
    fn test_hits_keep_catalog_order() {
        let hits = search("allah", None);
        assert!(hits.windows(2).all(|w| w[0].id < w[1].id));
    }
}
