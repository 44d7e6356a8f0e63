//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::generator::{generate, Record};
use crate::types::EntityKind;
// Textually scoped so `test_case`'s generated `use super::*` modules don't see
// an ambiguous glob-imported `assert_eq` alongside the prelude one.
macro_rules! assert_eq {
    ($($t:tt)*) => { pretty_assertions::assert_eq!($($t)*) };
}
use test_case::test_case;

// ============================================================================
// Total Pages
// ============================================================================

#[test_case(100, 10 => 10)]
#[test_case(101, 10 => 11)]
#[test_case(0, 10 => 0)]
#[test_case(1, 1000 => 1)]
#[test_case(25, 10 => 3)]
#[test_case(5, 0 => 0)]
fn test_total_pages(total: u64, page_size: u64) -> u64 {
    total_pages(total, page_size)
}

// ============================================================================
// Page Window
// ============================================================================

#[test]
fn test_page_window_first_page() {
    assert_eq!(page_window(1, 10, 25), PageWindow::Range(0..10));
}

#[test]
fn test_page_window_partial_last_page() {
    assert_eq!(page_window(3, 10, 25), PageWindow::Range(20..25));
}

#[test]
fn test_page_window_past_end() {
    assert_eq!(page_window(4, 10, 25), PageWindow::OutOfRange);
}

#[test]
fn test_page_window_exact_boundary() {
    assert_eq!(page_window(2, 10, 20), PageWindow::Range(10..20));
    assert_eq!(page_window(3, 10, 20), PageWindow::OutOfRange);
}

#[test]
fn test_page_window_empty_inputs() {
    assert_eq!(page_window(0, 10, 25), PageWindow::Empty);
    assert_eq!(page_window(1, 0, 25), PageWindow::Empty);
}

#[test]
fn test_page_window_no_records() {
    assert_eq!(page_window(1, 10, 0), PageWindow::OutOfRange);
}

#[test]
fn test_page_window_overflow_is_out_of_range() {
    assert_eq!(page_window(u64::MAX, 1000, 100), PageWindow::OutOfRange);
}

#[test]
fn test_window_indices_are_one_based() {
    let window = page_window(2, 5, 12);
    assert_eq!(window.indices(), 6..11);
    assert_eq!(window.len(), 5);
    assert!(!window.is_empty());

    assert!(PageWindow::OutOfRange.is_empty());
    assert_eq!(PageWindow::Empty.indices(), 0..0);
}

// ============================================================================
// Page Records
// ============================================================================

#[test]
fn test_page_records_preserve_order() {
    let records = page_records(EntityKind::Student, 2, 3, 10).unwrap();
    let expected: Vec<Record> = (4..=6).map(|i| generate(EntityKind::Student, i)).collect();
    assert_eq!(records, expected);
}

#[test]
fn test_page_records_out_of_range_is_none() {
    assert_eq!(page_records(EntityKind::School, 5, 10, 25), None);
}

#[test]
fn test_page_records_empty_inputs() {
    assert_eq!(page_records(EntityKind::Village, 0, 10, 25), Some(Vec::new()));
}

#[test]
fn test_pages_partition_collection() {
    let mut seen = Vec::new();
    for page in 1..=total_pages(23, 5) {
        let records = page_records(EntityKind::Village, page, 5, 23).unwrap();
        seen.extend(records.into_iter().map(|r| r.id().to_string()));
    }
    let all: Vec<String> = (1..=23)
        .map(|i| generate(EntityKind::Village, i).id().to_string())
        .collect();
    assert_eq!(seen, all);
}

// ============================================================================
// Envelope
// ============================================================================

#[test]
fn test_fetch_first_page() {
    let response = fetch_page(EntityKind::Student, PageRequest::default(), 100);
    assert_eq!(response.data.len(), 10);
    assert_eq!(response.page, 1);
    assert_eq!(response.page_size, 10);
    assert_eq!(response.total_records, 100);
    assert_eq!(response.total_pages, 10);
    assert!(response.has_next);
    assert!(!response.has_previous);
}

#[test]
fn test_fetch_last_page() {
    let request = PageRequest::default().with_page(11);
    let response = fetch_page(EntityKind::School, request, 101);
    assert_eq!(response.data.len(), 1);
    assert_eq!(response.total_pages, 11);
    assert!(!response.has_next);
    assert!(response.has_previous);
}

#[test]
fn test_fetch_out_of_range_returns_empty_data() {
    let request = PageRequest::default().with_page(4);
    let response = fetch_page(EntityKind::Village, request, 25);
    assert!(response.data.is_empty());
    assert_eq!(response.total_pages, 3);
    assert!(!response.has_next);
    assert!(response.has_previous);

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["data"], serde_json::json!([]));
}

#[test]
fn test_fetch_with_no_records() {
    let response = fetch_page(EntityKind::Student, PageRequest::default(), 0);
    assert!(response.data.is_empty());
    assert_eq!(response.total_pages, 0);
    assert!(!response.has_next);
    assert!(!response.has_previous);
}

#[test]
fn test_envelope_field_names() {
    let response = fetch_page(EntityKind::Student, PageRequest::default(), 3);
    let json = serde_json::to_value(&response).unwrap();
    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "data",
            "has_next",
            "has_previous",
            "page",
            "page_size",
            "total_pages",
            "total_records"
        ]
    );
}

// ============================================================================
// Page Request Validation
// ============================================================================

#[test]
fn test_page_request_defaults() {
    let request = PageRequest::new(None, None).unwrap();
    assert_eq!(request, PageRequest { page: 1, page_size: 10 });
}

#[test]
fn test_page_request_accepts_bounds() {
    assert_eq!(PageRequest::new(Some(1), Some(1)).unwrap().page_size, 1);
    assert_eq!(PageRequest::new(Some(7), Some(1000)).unwrap().page_size, 1000);
}

#[test_case(Some(0), None, "page")]
#[test_case(Some(-3), None, "page")]
#[test_case(None, Some(0), "page_size")]
#[test_case(None, Some(1001), "page_size")]
#[test_case(None, Some(-1), "page_size")]
fn test_page_request_rejects(page: Option<i64>, page_size: Option<i64>, field_name: &str) {
    match PageRequest::new(page, page_size) {
        Err(Error::Validation { field, .. }) => assert_eq!(field, field_name),
        other => panic!("expected validation error, got {other:?}"),
    }
}
