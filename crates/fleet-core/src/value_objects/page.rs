//! Offset pagination - page/limit requests and the metadata returned with each page

use serde::Serialize;

/// Validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Default page size
    pub const DEFAULT_LIMIT: i64 = 20;
    /// Maximum page size
    pub const MAX_LIMIT: i64 = 100;

    /// Build a request from raw values.
    ///
    /// A missing or zero `limit` falls back to the default; anything else is
    /// clamped to `1..=MAX_LIMIT`. A missing or non-positive `page` becomes 1.
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let limit = match limit {
            None | Some(0) => Self::DEFAULT_LIMIT,
            Some(l) => l.clamp(1, Self::MAX_LIMIT),
        };
        let page = page.unwrap_or(1).max(1);
        Self { page, limit }
    }

    #[inline]
    pub fn page(&self) -> i64 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of rows to skip
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub pages: i64,
}

impl PageMeta {
    pub fn new(total: i64, request: PageRequest) -> Self {
        let total = total.max(0);
        Self {
            total,
            page: request.page(),
            limit: request.limit(),
            pages: (total + request.limit() - 1) / request.limit(),
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            meta: PageMeta::new(total, request),
        }
    }

    /// Convert the items, keeping the metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
