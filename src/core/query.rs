//! Query parameters and pagination utilities

use crate::config::PaginationConfig;
use serde::{Deserialize, Serialize};

/// Query parameters for search endpoints
///
/// Extracted from the URL query string. All parameters have sensible defaults.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn search_persons(
///     Query(params): Query<QueryParams>,
/// ) -> Json<PaginatedResponse<Person>> {
///     // params.page defaults to 1
///     // params.limit defaults to the configured default
/// }
///
/// // Usage:
/// GET /persons/search?page=2&limit=10
/// GET /persons/search?filter=name:john,id>30
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: Option<usize>,

    /// Number of items per page
    pub limit: Option<usize>,

    /// Filter expression
    ///
    /// # Format
    /// Comma separated `key<op>value` conditions, `op` one of `:`, `<`, `>`.
    ///
    /// # Example
    /// ```text
    /// filter=name:john,id>30,gender:MALE
    /// ```
    pub filter: Option<String>,
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Get limit, falling back to the configured default and capped by the maximum
    pub fn limit(&self, config: &PaginationConfig) -> usize {
        self.limit
            .unwrap_or(config.default_limit)
            .clamp(1, config.max_limit.max(1))
    }

    /// The filter, with an empty parameter treated as absent
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|f| !f.is_empty())
    }

    /// Offset/limit window requested by these parameters
    pub fn pageable(&self, config: &PaginationConfig) -> Pageable {
        Pageable::new(self.page(), self.limit(config))
    }
}

/// A page request: 1-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pageable {
    pub page: usize,
    pub limit: usize,
}

impl Pageable {
    pub fn new(page: usize, limit: usize) -> Self {
        Self {
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Number of matching records to skip, saturating for pages past the end
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pageable {
    fn default() -> Self {
        let config = PaginationConfig::default();
        Self::new(1, config.default_limit)
    }
}

/// One page of results plus the total number of matches
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub pageable: Pageable,
}

impl<T> Page<T> {
    /// Convert the items, keeping pagination state
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            pageable: self.pageable,
        }
    }
}

/// Paginated response structure
///
/// This structure wraps paginated data with metadata about pagination state.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            pagination: PaginationMeta::new(page.pageable.page, page.pageable.limit, page.total),
            data: page.items,
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let limit = limit.max(1);
        let page = page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1).saturating_mul(limit);

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start.saturating_add(limit) < total,
            has_prev: page > 1,
        }
    }
}
