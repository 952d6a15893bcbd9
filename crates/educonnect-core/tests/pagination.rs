// crates/educonnect-core/tests/pagination.rs
// ============================================================================
// Module: Pagination Tests
// Description: Validate offset-cursor paging over filtered sequences.
// Purpose: Ensure cursors chain correctly and malformed input fails closed.
// Dependencies: educonnect-core
// ============================================================================

//! Pagination behavior tests over the seeded school directory.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

use educonnect_core::FilterError;
use educonnect_core::FilterState;
use educonnect_core::InMemoryDirectory;
use educonnect_core::MAX_PAGE_LIMIT;
use educonnect_core::PageCursor;
use educonnect_core::School;
use educonnect_core::filter_records;
use educonnect_core::paginate;

type TestResult = Result<(), String>;

/// Returns the seeded schools as a filtered reference sequence.
fn all_school_rows(directory: &InMemoryDirectory) -> Vec<&School> {
    filter_records(directory.schools(), &FilterState::new())
}

#[test]
fn first_page_carries_a_cursor_to_the_next() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let rows = all_school_rows(&directory);

    let first = paginate(&rows, None, 3).map_err(|err| err.to_string())?;
    if first.rows.len() != 3 || first.total != 8 {
        return Err(format!("unexpected first page shape: {}/{}", first.rows.len(), first.total));
    }
    let cursor = first.next_cursor.ok_or("expected a next cursor")?;
    let second = paginate(&rows, Some(&cursor), 3).map_err(|err| err.to_string())?;
    if second.rows.first().map(|school| school.name.as_str()) == Some("Sunset International") {
        Ok(())
    } else {
        Err("second page did not resume after the first".to_string())
    }
}

#[test]
fn chained_pages_reassemble_the_full_sequence() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let rows = all_school_rows(&directory);
    let mut collected: Vec<&School> = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page =
            paginate(&rows, cursor.as_deref(), 3).map_err(|err| err.to_string())?;
        collected.extend(page.rows);
        match page.next_cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    if collected == rows {
        Ok(())
    } else {
        Err("chained pages did not reassemble the sequence".to_string())
    }
}

#[test]
fn exhausted_sequence_yields_no_next_cursor() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let rows = all_school_rows(&directory);

    let page = paginate(&rows, None, rows.len()).map_err(|err| err.to_string())?;
    if page.next_cursor.is_none() && page.rows.len() == rows.len() {
        Ok(())
    } else {
        Err("expected a single exhaustive page".to_string())
    }
}

#[test]
fn limit_is_clamped_to_the_page_maximum() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let rows = all_school_rows(&directory);

    let page = paginate(&rows, None, MAX_PAGE_LIMIT.saturating_mul(4))
        .map_err(|err| err.to_string())?;
    if page.rows.len() == rows.len() {
        Ok(())
    } else {
        Err("oversized limit changed the visible rows".to_string())
    }
}

#[test]
fn offset_beyond_the_end_yields_an_empty_page() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let rows = all_school_rows(&directory);
    let encoded = PageCursor::new(999).encode().map_err(|err| err.to_string())?;

    let page = paginate(&rows, Some(&encoded), 3).map_err(|err| err.to_string())?;
    if page.rows.is_empty() && page.total == 8 && page.next_cursor.is_none() {
        Ok(())
    } else {
        Err("expected an empty terminal page".to_string())
    }
}

#[test]
fn zero_limit_reports_totals_without_rows() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let rows = all_school_rows(&directory);

    let page = paginate(&rows, None, 0).map_err(|err| err.to_string())?;
    if page.rows.is_empty() && page.total == 8 && page.next_cursor.is_some() {
        Ok(())
    } else {
        Err("expected an empty page with a resume cursor".to_string())
    }
}

#[test]
fn malformed_cursor_fails_closed() {
    let directory = InMemoryDirectory::seeded();
    let rows = all_school_rows(&directory);

    let result = paginate(&rows, Some("not-a-cursor"), 3);
    assert!(matches!(result, Err(FilterError::InvalidCursor(_))));
}

#[test]
fn oversized_cursor_is_rejected_before_parsing() {
    let oversized = "9".repeat(1024);
    let result = PageCursor::decode(&oversized);
    assert!(matches!(result, Err(FilterError::InvalidCursor(_))));
}

#[test]
fn cursor_round_trips_through_its_wire_form() -> TestResult {
    let encoded = PageCursor::new(5).encode().map_err(|err| err.to_string())?;
    let decoded = PageCursor::decode(&encoded).map_err(|err| err.to_string())?;
    if decoded.offset() == 5 {
        Ok(())
    } else {
        Err(format!("unexpected offset after round trip: {}", decoded.offset()))
    }
}
