//! Pagination module
//!
//! Page-number pagination over a virtual collection of `total_records` items.
//!
//! # Overview
//!
//! A page request maps to a half-open window of 0-based positions; position
//! `p` is served by the generator at 1-based index `p + 1`. Requests past the
//! end of the collection are not errors: they produce an empty page whose
//! metadata still describes the collection.

mod types;
mod window;

pub use types::{
    PageRequest, PageWindow, PaginatedResponse, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use window::{fetch_page, page_records, page_window, total_pages};

#[cfg(test)]
mod tests;
