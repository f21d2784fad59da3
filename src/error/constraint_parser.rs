use regex::Regex;
use std::sync::OnceLock;

/// Tables of this schema, longest first so `azkar_progress_*` is not read as `azkar_*`.
const KNOWN_TABLES: &[&str] = &[
    "azkar_categories",
    "azkar_progress",
    "tasbih_counts",
    "bookmarks",
    "azkar",
    "users",
];

/// Constraint name suffixes PostgreSQL generates.
const SUFFIXES: &[&str] = &["_fkey", "_pkey", "_check", "_key"];

/// Utility for parsing PostgreSQL constraint violation messages.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(|| RegexPatterns {
            // "Key (user_id, date)=(1, 2025-01-01)"
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").expect("valid regex"),
            column_name: Regex::new(r#"column "([^"]+)""#).expect("valid regex"),
            table_name: Regex::new(r#"(?:table|relation) "([^"]+)""#).expect("valid regex"),
        })
    }

    /// Splits a generated constraint name into `(table, columns)`.
    ///
    /// `azkar_title_category_id_key` becomes `("azkar", "title_category_id")`,
    /// `users_email_key` becomes `("users", "email")`.
    pub fn parse_constraint_name(constraint_name: &str) -> Option<(String, String)> {
        let stem = SUFFIXES
            .iter()
            .find_map(|suffix| constraint_name.strip_suffix(suffix))?;

        KNOWN_TABLES.iter().find_map(|table| {
            let rest = stem.strip_prefix(table)?.strip_prefix('_')?;
            (!rest.is_empty()).then(|| (table.to_string(), rest.to_string()))
        })
    }

    /// Parses a unique violation into `(entity, field, value)`.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let key_value = Self::extract_key_value_from_message(message);

        if let Some((entity, field)) = constraint_name.and_then(Self::parse_constraint_name) {
            let (field, value) = match key_value {
                Some((fields, value)) => (fields, value),
                None => (field, "duplicate_value".to_string()),
            };
            return Some((entity, field, value));
        }

        let (field, value) = key_value?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field, value))
    }

    /// Parses a not-null violation into `(entity, field)`.
    pub fn parse_not_null_violation(message: &str) -> Option<(String, String)> {
        let field = Self::extract_column_from_message(message)?;
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Parses a foreign key violation into `(entity, field, referenced_value)`.
    pub fn parse_foreign_key_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        let parsed = constraint_name.and_then(Self::parse_constraint_name);
        let key_value = Self::extract_key_value_from_message(message);

        match (parsed, key_value) {
            (Some((entity, field)), Some((_, value))) => Some((entity, field, value)),
            (Some((entity, field)), None) => Some((entity, field, "invalid_reference".to_string())),
            (None, Some((field, value))) => {
                let entity = Self::extract_table_from_message(message)
                    .unwrap_or_else(|| "resource".to_string());
                Some((entity, field, value))
            }
            (None, None) => None,
        }
    }

    /// Parses a check violation into `(entity, field)`.
    pub fn parse_check_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        constraint_name
            .and_then(Self::parse_constraint_name)
            .or_else(|| Self::parse_not_null_violation(message))
    }

    pub fn extract_column_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .column_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    pub fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Extracts `(fields, values)` from the `Key (..)=(..)` detail line.
    pub fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns().key_value.captures(message).and_then(|caps| {
            let field = caps.get(1)?.as_str().to_string();
            let value = caps.get(2)?.as_str().to_string();
            Some((field, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constraint_name_single_column() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("users_email_key"),
            Some(("users".to_string(), "email".to_string()))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("azkar_categories_name_key"),
            Some(("azkar_categories".to_string(), "name".to_string()))
        );
    }

    #[test]
    fn test_parse_constraint_name_prefers_longest_table() {
        assert_eq!(
            ConstraintParser::parse_constraint_name("azkar_progress_user_id_azkar_id_date_key"),
            Some((
                "azkar_progress".to_string(),
                "user_id_azkar_id_date".to_string()
            ))
        );
        assert_eq!(
            ConstraintParser::parse_constraint_name("azkar_category_id_fkey"),
            Some(("azkar".to_string(), "category_id".to_string()))
        );
    }

    #[test]
    fn test_parse_constraint_name_unknown() {
        assert_eq!(ConstraintParser::parse_constraint_name("posts_title_idx"), None);
        assert_eq!(ConstraintParser::parse_constraint_name("orders_id_key"), None);
    }

    #[test]
    fn test_parse_unique_violation_composite_key() {
        let message = "duplicate key value violates unique constraint \"bookmarks_user_id_azkar_id_key\"\nDETAIL: Key (user_id, azkar_id)=(1, 7) already exists.";
        let result = ConstraintParser::parse_unique_violation(
            message,
            Some("bookmarks_user_id_azkar_id_key"),
        );
        assert_eq!(
            result,
            Some((
                "bookmarks".to_string(),
                "user_id, azkar_id".to_string(),
                "1, 7".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_unique_violation_without_constraint_name() {
        let message = "duplicate key value violates unique constraint\nDETAIL: Key (email)=(a@b.co) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "resource".to_string(),
                "email".to_string(),
                "a@b.co".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_not_null_violation() {
        let message =
            "null value in column \"title\" of relation \"azkar\" violates not-null constraint";
        assert_eq!(
            ConstraintParser::parse_not_null_violation(message),
            Some(("azkar".to_string(), "title".to_string()))
        );
    }
}
