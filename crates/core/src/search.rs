//! Search helpers shared by the name and question search endpoints.
//!
//! Searches are case-insensitive substring matches executed with PostgreSQL
//! `ILIKE`; this module only builds the pattern and clamps listing bounds.

/// Default number of rows for bounded listings.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of rows for bounded listings.
pub const MAX_LIST_LIMIT: i64 = 200;

/// PostgreSQL's default `LIKE` / `ILIKE` escape character.
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern that matches `term` anywhere in the column.
///
/// `%`, `_` and the escape character itself are escaped so that user input
/// is matched literally. An empty term yields `%%`, which matches every row.
///
/// # Examples
///
/// ```
/// use classroom_core::search::contains_pattern;
/// assert_eq!(contains_pattern("title"), "%title%");
/// assert_eq!(contains_pattern("50%"), "%50\\%%");
/// ```
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
