//! Pagination types
//!
//! Listing loads the full group set and slices it in memory, so pagination
//! here works on a `Vec<T>` rather than producing SQL OFFSET/LIMIT.

use serde::{Deserialize, Serialize};

/// Default page number
const DEFAULT_PAGE: u32 = 1;

/// Default items per page
const DEFAULT_LIMIT: u32 = 10;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl Pagination {
    /// Create pagination; zero page or limit falls back to the default.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// Index one past the last item on this page.
    pub fn end(&self) -> u64 {
        self.page as u64 * self.limit as u64
    }

    /// Slice a full result set down to this page.
    pub fn paginate<T>(&self, all: Vec<T>) -> Page<T> {
        let total = all.len() as u64;
        let limit = self.limit as u64;

        let next = (self.end() < total).then(|| PageLink {
            page: self.page + 1,
            limit: self.limit,
        });
        let prev = (self.page > 1).then(|| PageLink {
            page: self.page - 1,
            limit: self.limit,
        });

        let items = all
            .into_iter()
            .skip(usize::try_from(self.offset()).unwrap_or(usize::MAX))
            .take(self.limit as usize)
            .collect();

        Page {
            next,
            prev,
            total_pages: total.div_ceil(limit),
            items,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pointer to a neighbouring page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub page: u32,
    pub limit: u32,
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Present only when a further page exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    /// Present only when a previous page exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    pub items: Vec<T>,
}

/// Query parameters for pagination
///
/// Kept as raw strings: a non-numeric or non-positive value falls back to the
/// default instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn lenient(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(
            lenient(params.page.as_deref(), DEFAULT_PAGE),
            lenient(params.limit.as_deref(), DEFAULT_LIMIT),
        )
    }
}
