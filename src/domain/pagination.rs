//! One-based page arithmetic shared by the picker and the word list.

use serde::Serialize;

const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based
    pub page: u64,
    pub per_page: u64,
}

impl PageRequest {
    /// Out-of-range input falls back to the first page instead of failing.
    /// Huge page numbers are capped so the row offset still fits SQLite's i64.
    pub fn new(page: u64, per_page: u64) -> Self {
        let per_page = per_page.max(1);
        Self {
            page: page.clamp(1, MAX_OFFSET / per_page),
            per_page,
        }
    }

    /// Lenient query-string parsing: anything that is not a positive integer means page 1.
    pub fn from_param(raw: Option<&str>, per_page: u64) -> Self {
        let page = raw
            .and_then(|p| p.trim().parse::<u64>().ok())
            .unwrap_or(1);
        Self::new(page, per_page)
    }

    /// Zero-based index for SeaORM's paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub prev_num: Option<u64>,
    pub next_num: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let pages = total.div_ceil(request.per_page);
        let has_prev = request.page > 1;
        let has_next = request.page < pages;
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
            pages,
            has_prev,
            has_next,
            prev_num: has_prev.then(|| request.page - 1),
            next_num: has_next.then(|| request.page + 1),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            pages: self.pages,
            has_prev: self.has_prev,
            has_next: self.has_next,
            prev_num: self.prev_num,
            next_num: self.next_num,
        }
    }
}
