//! Pagination types
//!
//! Defines the page request, the computed window and the response envelope.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page served when the client does not ask for one
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the client does not ask for one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u64 = 1000;

/// Result of mapping a page request onto a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageWindow {
    /// Page or page size below 1; nothing to serve
    Empty,
    /// The page starts at or past the end of the collection
    OutOfRange,
    /// 0-based positions covered by the page
    Range(Range<u64>),
}

impl PageWindow {
    /// Number of records in the window
    pub fn len(&self) -> u64 {
        match self {
            PageWindow::Range(range) => range.end - range.start,
            PageWindow::Empty | PageWindow::OutOfRange => 0,
        }
    }

    /// Check if the window holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 1-based record indices covered by the window, in order
    pub fn indices(&self) -> Range<u64> {
        match self {
            PageWindow::Range(range) => range.start.saturating_add(1)..range.end.saturating_add(1),
            PageWindow::Empty | PageWindow::OutOfRange => 0..0,
        }
    }
}

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    /// Records per page, `1..=MAX_PAGE_SIZE`
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Validate raw client input, falling back to defaults for absent values
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Result<Self> {
        let page = match page {
            None => DEFAULT_PAGE,
            Some(p) if p >= 1 => p as u64,
            Some(p) => {
                return Err(Error::validation(
                    "page",
                    format!("must be greater than or equal to 1, got {p}"),
                ))
            }
        };

        let page_size = match page_size {
            None => DEFAULT_PAGE_SIZE,
            Some(s) if s < 1 => {
                return Err(Error::validation(
                    "page_size",
                    format!("must be greater than or equal to 1, got {s}"),
                ))
            }
            Some(s) if s as u64 > MAX_PAGE_SIZE => {
                return Err(Error::validation(
                    "page_size",
                    format!("must be less than or equal to {MAX_PAGE_SIZE}, got {s}"),
                ))
            }
            Some(s) => s as u64,
        };

        Ok(Self { page, page_size })
    }

    /// Set the page
    #[must_use]
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Response envelope for a page of records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Records on this page; empty when the page is past the end
    pub data: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_records: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a page of data with metadata derived from the request
    pub fn new(data: Vec<T>, request: PageRequest, total_records: u64) -> Self {
        let total_pages = super::window::total_pages(total_records, request.page_size);
        Self {
            data,
            page: request.page,
            page_size: request.page_size,
            total_records,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }
}
