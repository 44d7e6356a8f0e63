//! Page window arithmetic

use super::types::{PageRequest, PageWindow, PaginatedResponse};
use crate::generator::{generate, Record};
use crate::types::EntityKind;

/// Number of pages needed to hold `total_records` at `page_size` per page
pub fn total_pages(total_records: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_records.div_ceil(page_size)
}

/// Map a page onto the 0-based positions it covers
pub fn page_window(page: u64, page_size: u64, total_records: u64) -> PageWindow {
    if page < 1 || page_size < 1 {
        return PageWindow::Empty;
    }

    let Some(start) = (page - 1).checked_mul(page_size) else {
        return PageWindow::OutOfRange;
    };
    if start >= total_records {
        return PageWindow::OutOfRange;
    }

    let end = start.saturating_add(page_size).min(total_records);
    PageWindow::Range(start..end)
}

/// Generate the records on a page, or `None` if the page is past the end
pub fn page_records(
    kind: EntityKind,
    page: u64,
    page_size: u64,
    total_records: u64,
) -> Option<Vec<Record>> {
    match page_window(page, page_size, total_records) {
        PageWindow::Empty => Some(Vec::new()),
        PageWindow::OutOfRange => None,
        window @ PageWindow::Range(_) => {
            Some(window.indices().map(|index| generate(kind, index)).collect())
        }
    }
}

/// Build the full response envelope for a page.
///
/// Out-of-range pages yield `data: []`.
pub fn fetch_page(
    kind: EntityKind,
    request: PageRequest,
    total_records: u64,
) -> PaginatedResponse<Record> {
    let data = page_records(kind, request.page, request.page_size, total_records)
        .unwrap_or_default();
    PaginatedResponse::new(data, request, total_records)
}
