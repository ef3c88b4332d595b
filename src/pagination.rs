//! Page requests and page payloads for the filtered task listings.

use serde::{Deserialize, Serialize};

/// Default number of rows per page when the request does not say.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A page request: zero-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    /// Builds a page request. A zero size is clamped to one row so the
    /// offset and page-count arithmetic stay defined.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    /// Row offset of the first element of this page.
    pub fn offset(&self) -> u32 {
        self.page * self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// One page of results together with the total match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_size: u64) -> Self {
        Self {
            content,
            page: request.page,
            size: request.size,
            total_size,
        }
    }

    /// Total number of pages, rounded up.
    pub fn total_pages(&self) -> u64 {
        (self.total_size + u64::from(self.size) - 1) / u64::from(self.size)
    }

    /// Maps the page content, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_size: self.total_size,
        }
    }
}
