// crates/educonnect-core/tests/filter.rs
// ============================================================================
// Module: Filter Evaluator Tests
// Description: Validate filter/search semantics over directory records.
// Purpose: Ensure the projection is pure, ordered, and case-insensitive.
// Dependencies: educonnect-core
// ============================================================================

//! Scenario tests for the tabular filter/search evaluator.

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
use educonnect_core::MAX_SEARCH_TERM_BYTES;
use educonnect_core::School;
use educonnect_core::SchoolId;
use educonnect_core::SchoolKind;
use educonnect_core::SchoolStatus;
use educonnect_core::Selection;
use educonnect_core::filter_records;

type TestResult = Result<(), String>;

/// Builds the two-record sequence used by the worked examples.
fn example_schools() -> Result<Vec<School>, String> {
    let springfield = SchoolId::from_raw(1).ok_or("nonzero school id")?;
    let green_valley = SchoolId::from_raw(2).ok_or("nonzero school id")?;
    Ok(vec![
        School {
            id: springfield,
            name: "Springfield Academy".to_string(),
            kind: SchoolKind::Primary,
            region: "North".to_string(),
            status: SchoolStatus::Active,
            verified: true,
            admissions: 45,
            contact: "principal@springfield.edu".to_string(),
        },
        School {
            id: green_valley,
            name: "Green Valley".to_string(),
            kind: SchoolKind::Secondary,
            region: "South".to_string(),
            status: SchoolStatus::Pending,
            verified: false,
            admissions: 0,
            contact: "admin@greenvalley.edu".to_string(),
        },
    ])
}

#[test]
fn search_term_selects_matching_name() -> TestResult {
    let schools = example_schools()?;
    let state = FilterState::new()
        .with_search("green")
        .with_selection("status", Selection::All);
    let result = filter_records(&schools, &state);
    let names: Vec<&str> = result.iter().map(|school| school.name.as_str()).collect();
    if names == ["Green Valley"] {
        Ok(())
    } else {
        Err(format!("expected [Green Valley], got {names:?}"))
    }
}

#[test]
fn status_selection_without_search_selects_pending() -> TestResult {
    let schools = example_schools()?;
    let state = FilterState::new().with_selection("status", Selection::parse("pending"));
    let result = filter_records(&schools, &state);
    let names: Vec<&str> = result.iter().map(|school| school.name.as_str()).collect();
    if names == ["Green Valley"] {
        Ok(())
    } else {
        Err(format!("expected [Green Valley], got {names:?}"))
    }
}

#[test]
fn empty_state_is_identity() -> TestResult {
    let schools = example_schools()?;
    let state = FilterState::new();
    if !state.is_empty() {
        return Err("fresh state should be empty".to_string());
    }
    let result = filter_records(&schools, &state);
    if result.len() == schools.len() {
        Ok(())
    } else {
        Err(format!("expected {} rows, got {}", schools.len(), result.len()))
    }
}

#[test]
fn all_sentinel_parses_to_no_constraint() -> TestResult {
    if Selection::parse("all") != Selection::All {
        return Err("lowercase sentinel should parse to All".to_string());
    }
    if Selection::parse("ALL") != Selection::All {
        return Err("uppercase sentinel should parse to All".to_string());
    }
    if Selection::parse("active") != Selection::Only("active".to_string()) {
        return Err("non-sentinel value should parse to Only".to_string());
    }
    Ok(())
}

#[test]
fn search_is_case_insensitive() -> TestResult {
    let schools = example_schools()?;
    let upper = filter_records(&schools, &FilterState::new().with_search("SPRING"));
    let lower = filter_records(&schools, &FilterState::new().with_search("spring"));
    let upper_names: Vec<&str> = upper.iter().map(|school| school.name.as_str()).collect();
    let lower_names: Vec<&str> = lower.iter().map(|school| school.name.as_str()).collect();
    if upper_names == lower_names && upper_names == ["Springfield Academy"] {
        Ok(())
    } else {
        Err(format!("case variants diverged: {upper_names:?} vs {lower_names:?}"))
    }
}

#[test]
fn unmatched_search_yields_zero_results() -> TestResult {
    let schools = example_schools()?;
    let result = filter_records(&schools, &FilterState::new().with_search("nonexistent"));
    if result.is_empty() {
        Ok(())
    } else {
        Err(format!("expected 0 results, got {}", result.len()))
    }
}

#[test]
fn empty_input_yields_empty_output() -> TestResult {
    let schools: Vec<School> = Vec::new();
    let state = FilterState::new()
        .with_search("anything")
        .with_selection("status", Selection::parse("active"));
    if filter_records(&schools, &state).is_empty() {
        Ok(())
    } else {
        Err("empty input must yield empty output".to_string())
    }
}

#[test]
fn unknown_field_fails_to_match() -> TestResult {
    let schools = example_schools()?;
    let state = FilterState::new().with_selection("campus", Selection::parse("north"));
    if filter_records(&schools, &state).is_empty() {
        Ok(())
    } else {
        Err("unknown categorical field must fail to match".to_string())
    }
}

#[test]
fn combined_constraints_intersect() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let state = FilterState::new()
        .with_search("school")
        .with_selection("status", Selection::parse("pending"));
    let result = filter_records(directory.schools(), &state);
    let names: Vec<&str> = result.iter().map(|school| school.name.as_str()).collect();
    if names == ["Blue Ridge School"] {
        Ok(())
    } else {
        Err(format!("expected [Blue Ridge School], got {names:?}"))
    }
}

#[test]
fn ticket_search_scans_identifier() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let state = FilterState::new().with_search("tkt-1003");
    let result = filter_records(directory.tickets(), &state);
    let subjects: Vec<&str> = result.iter().map(|ticket| ticket.subject.as_str()).collect();
    if subjects == ["Request for feature: Bulk upload"] {
        Ok(())
    } else {
        Err(format!("expected the bulk-upload ticket, got {subjects:?}"))
    }
}

#[test]
fn vendor_search_scans_category_label() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let state = FilterState::new().with_search("uniforms");
    let result = filter_records(directory.vendors(), &state);
    let names: Vec<&str> = result.iter().map(|vendor| vendor.name.as_str()).collect();
    if names == ["Smart Uniforms Ltd"] {
        Ok(())
    } else {
        Err(format!("expected [Smart Uniforms Ltd], got {names:?}"))
    }
}

#[test]
fn validate_rejects_oversized_search_term() -> TestResult {
    let state = FilterState::new().with_search("x".repeat(MAX_SEARCH_TERM_BYTES + 1));
    match state.validate() {
        Err(FilterError::SearchTermTooLong {
            ..
        }) => Ok(()),
        other => Err(format!("expected SearchTermTooLong, got {other:?}")),
    }
}

#[test]
fn validate_rejects_blank_field_name() -> TestResult {
    let state = FilterState::new().with_selection("  ", Selection::parse("active"));
    match state.validate() {
        Err(FilterError::BlankFieldName) => Ok(()),
        other => Err(format!("expected BlankFieldName, got {other:?}")),
    }
}

#[test]
fn validate_rejects_reserved_sentinel_value() -> TestResult {
    let state = FilterState::new().with_selection("status", Selection::Only("All".to_string()));
    match state.validate() {
        Err(FilterError::InvalidSelection {
            ..
        }) => Ok(()),
        other => Err(format!("expected InvalidSelection, got {other:?}")),
    }
}

#[test]
fn validate_accepts_ordinary_state() -> TestResult {
    let state = FilterState::new()
        .with_search("spring")
        .with_selection("status", Selection::parse("active"));
    state.validate().map_err(|err| err.to_string())
}
