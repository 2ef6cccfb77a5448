//! Shared query parameter types for API handlers.

use classroom_core::pagination::parse_page;
use serde::Deserialize;

/// Page-number pagination (`?page=`).
///
/// Kept as a raw string so that unparseable values fall back to page 1
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// The requested page, defaulting to 1.
    pub fn page(&self) -> i64 {
        parse_page(self.page.as_deref())
    }
}

/// Generic limit/offset parameters (`?limit=&offset=`).
///
/// Values are clamped via `classroom_core::search::{clamp_limit, clamp_offset}`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
