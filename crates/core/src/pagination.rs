//! Page-window arithmetic and the pagination envelope returned by searches.

use serde::{Deserialize, Serialize};

use crate::search::FIRST_PAGE;

/// A requested slice of a result set: 1-indexed page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: i64,
    per_page: i64,
}

impl PageWindow {
    /// Both values are clamped to at least 1.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(FIRST_PAGE),
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Number of matching rows to skip before this page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }
}

/// Pagination metadata describing where a page sits in the full result set.
///
/// `prev` and `next` hold the adjacent page numbers, or `0` when that page
/// would fall outside `1..=total_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub per_page: i64,
    pub prev: i64,
    pub next: i64,
    pub total: i64,
    pub total_page: i64,
}

impl PaginationMeta {
    pub fn new(window: PageWindow, total: i64) -> Self {
        let total = total.max(0);
        let per_page = window.per_page();
        let page = window.page();
        let total_page = if total == 0 {
            0
        } else {
            (total - 1) / per_page + 1
        };

        let in_range = |p: &i64| (FIRST_PAGE..=total_page).contains(p);
        let prev = page.checked_sub(1).filter(in_range).unwrap_or(0);
        let next = page.checked_add(1).filter(in_range).unwrap_or(0);

        Self {
            page,
            per_page,
            prev,
            next,
            total,
            total_page,
        }
    }
}

/// A page of results together with its [`PaginationMeta`].
///
/// Serializes flat: `{page, perPage, prev, next, total, totalPage, result}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(flatten)]
    pub meta: PaginationMeta,
    pub result: Vec<T>,
}
