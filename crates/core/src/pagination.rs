//! Page-number pagination over an already-fetched, ordered result set.
//!
//! Pages are 1-based and hold [`QUESTIONS_PER_PAGE`] items each.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Page used when the client omits `?page=` or sends something unparseable.
pub const DEFAULT_PAGE: i64 = 1;

/// Parse the raw `page` query value.
///
/// Missing or non-integer values fall back to [`DEFAULT_PAGE`]. Out-of-range
/// integers (zero, negatives) are passed through and simply yield an empty page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Half-open `[start, end)` index window for a page, or `None` for pages < 1.
pub fn page_window(page: i64) -> Option<(usize, usize)> {
    if page < 1 {
        return None;
    }
    let start = (page - 1).checked_mul(QUESTIONS_PER_PAGE)?;
    let end = start.checked_add(QUESTIONS_PER_PAGE)?;
    Some((usize::try_from(start).ok()?, usize::try_from(end).ok()?))
}

/// Return the items that belong on `page`, cloned out of `items`.
///
/// An out-of-range page produces an empty vector; callers decide whether that
/// is a 404.
pub fn paginate<T: Clone>(items: &[T], page: i64) -> Vec<T> {
    let Some((start, end)) = page_window(page) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    items[start..end.min(items.len())].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: i64) -> Vec<i64> {
        (1..=n).collect()
    }

    // -- parse_page ----------------------------------------------------------

    #[test]
    fn missing_page_defaults_to_first() {
        assert_eq!(parse_page(None), 1);
    }

    #[test]
    fn garbage_page_defaults_to_first() {
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("1.5")), 1);
    }

    #[test]
    fn numeric_page_is_parsed() {
        assert_eq!(parse_page(Some("3")), 3);
        assert_eq!(parse_page(Some(" 2 ")), 2);
        assert_eq!(parse_page(Some("-1")), -1);
    }

    // -- page_window ---------------------------------------------------------

    #[test]
    fn first_page_window() {
        assert_eq!(page_window(1), Some((0, 10)));
    }

    #[test]
    fn third_page_window() {
        assert_eq!(page_window(3), Some((20, 30)));
    }

    #[test]
    fn non_positive_pages_have_no_window() {
        assert_eq!(page_window(0), None);
        assert_eq!(page_window(-4), None);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert_eq!(page_window(i64::MAX), None);
    }

    // -- paginate ------------------------------------------------------------

    #[test]
    fn full_first_page() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 1), numbers(10));
    }

    #[test]
    fn partial_last_page() {
        let items = numbers(25);
        assert_eq!(paginate(&items, 3), vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_past_end_is_empty() {
        let items = numbers(25);
        assert!(paginate(&items, 4).is_empty());
    }

    #[test]
    fn zero_page_is_empty() {
        let items = numbers(5);
        assert!(paginate(&items, 0).is_empty());
    }

    #[test]
    fn empty_input_is_empty() {
        let items: Vec<i64> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }
}
