// Length-aware pagination and the metadata block exposed in collection envelopes

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PER_PAGE: u64 = 15;

/// Query string accepted by paginated endpoints (`?page=2&per_page=10`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1, max = 100000, message = "The page must be between 1 and 100000."))]
    pub page: Option<u64>,
    #[validate(range(min = 1, max = 100, message = "The per page must be between 1 and 100."))]
    pub per_page: Option<u64>,
}

impl PageQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Number of rows to skip for the requested page
    pub fn offset(&self) -> u64 {
        self.page().saturating_sub(1).saturating_mul(self.per_page())
    }
}

/// Raw paginator fields, as read from whatever produced the page.
/// Every field is optional; the envelope passes missing ones through as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub total: Option<u64>,
    pub per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub last_page: Option<u64>,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
    pub first_page_url: Option<String>,
    pub last_page_url: Option<String>,
}

impl PaginationMeta {
    /// Items on the page: `to - (from - 1)` when both bounds are known, else the raw item count.
    /// Computed as `(to + 1) - from` so `from = 0` still yields `to + 1`; a negative result clamps to zero.
    pub fn count(&self, item_count: usize) -> u64 {
        match (self.to, self.from) {
            (Some(to), Some(from)) => to.saturating_add(1).saturating_sub(from),
            _ => item_count as u64,
        }
    }

    pub fn to_block(&self, item_count: usize) -> PaginationBlock {
        PaginationBlock {
            total: self.total,
            count: self.count(item_count),
            per_page: self.per_page,
            current_page: self.current_page,
            total_pages: self.last_page,
            links: PaginationLinks {
                next: self.next_page_url.clone(),
                prev: self.prev_page_url.clone(),
                first: self.first_page_url.clone(),
                last: self.last_page_url.clone(),
            },
        }
    }
}

/// `pagination` object of a paginated collection envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationBlock {
    pub total: Option<u64>,
    pub count: u64,
    pub per_page: Option<u64>,
    pub current_page: Option<u64>,
    pub total_pages: Option<u64>,
    pub links: PaginationLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationLinks {
    pub next: Option<String>,
    pub prev: Option<String>,
    pub first: Option<String>,
    pub last: Option<String>,
}

/// A single page of items together with the total number of items across all pages
#[derive(Debug, Clone)]
pub struct LengthAwarePaginator<T> {
    items: Vec<T>,
    total: u64,
    per_page: u64,
    current_page: u64,
    path: String,
}

impl<T> LengthAwarePaginator<T> {
    pub fn new(items: Vec<T>, total: u64, per_page: u64, current_page: u64, path: impl Into<String>) -> Self {
        Self {
            items,
            total,
            per_page: per_page.max(1),
            current_page: current_page.max(1),
            path: path.into(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn last_page(&self) -> u64 {
        self.total.div_ceil(self.per_page).max(1)
    }

    /// 1-based position of the first item on this page, `None` for an empty page
    pub fn from(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        Some((self.current_page - 1).saturating_mul(self.per_page).saturating_add(1))
    }

    pub fn to(&self) -> Option<u64> {
        self.from()
            .map(|from| from.saturating_add(self.items.len() as u64).saturating_sub(1))
    }

    pub fn url(&self, page: u64) -> String {
        format!("{}?page={}", self.path, page)
    }

    pub fn next_page_url(&self) -> Option<String> {
        (self.current_page < self.last_page()).then(|| self.url(self.current_page + 1))
    }

    pub fn prev_page_url(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.url(self.current_page - 1))
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            total: Some(self.total),
            per_page: Some(self.per_page),
            current_page: Some(self.current_page),
            last_page: Some(self.last_page()),
            from: self.from(),
            to: self.to(),
            next_page_url: self.next_page_url(),
            prev_page_url: self.prev_page_url(),
            first_page_url: Some(self.url(1)),
            last_page_url: Some(self.url(self.last_page())),
        }
    }
}
