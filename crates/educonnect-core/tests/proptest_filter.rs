// crates/educonnect-core/tests/proptest_filter.rs
// ============================================================================
// Module: Filter Property-Based Tests
// Description: Property tests for filter projection invariants.
// Purpose: Detect ordering, purity, and case-sensitivity regressions.
// ============================================================================

//! Property-based tests for filter evaluator invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions and helpers are permitted."
)]

use educonnect_core::FilterState;
use educonnect_core::School;
use educonnect_core::SchoolId;
use educonnect_core::SchoolKind;
use educonnect_core::SchoolStatus;
use educonnect_core::Selection;
use educonnect_core::filter_records;
use proptest::prelude::*;

/// Strategy for school statuses.
fn status_strategy() -> impl Strategy<Value = SchoolStatus> {
    prop_oneof![
        Just(SchoolStatus::Active),
        Just(SchoolStatus::Pending),
        Just(SchoolStatus::Suspended),
    ]
}

/// Strategy for school kinds.
fn kind_strategy() -> impl Strategy<Value = SchoolKind> {
    prop_oneof![
        Just(SchoolKind::Primary),
        Just(SchoolKind::Secondary),
        Just(SchoolKind::HigherSecondary),
        Just(SchoolKind::International),
    ]
}

/// Strategy for a single school record with a positional identifier.
fn school_strategy(ordinal: u64) -> impl Strategy<Value = School> {
    (
        "[A-Za-z ]{0,16}",
        kind_strategy(),
        "[A-Za-z]{0,8}",
        status_strategy(),
        any::<bool>(),
        any::<u32>(),
    )
        .prop_map(move |(name, kind, region, status, verified, admissions)| School {
            id: SchoolId::from_raw(ordinal).unwrap(),
            name,
            kind,
            region,
            status,
            verified,
            admissions,
            contact: String::new(),
        })
}

/// Strategy for an ordered school sequence.
fn schools_strategy() -> impl Strategy<Value = Vec<School>> {
    prop::collection::vec(any::<()>(), 0 .. 12).prop_flat_map(|slots| {
        let rows: Vec<_> = (1 ..= slots.len())
            .map(|ordinal| school_strategy(u64::try_from(ordinal).unwrap_or(1)))
            .collect();
        rows
    })
}

/// Strategy for filter states over school fields.
fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        "[a-zA-Z ]{0,8}",
        prop_oneof![
            Just(Selection::All),
            "[a-z ]{1,10}".prop_map(Selection::Only),
        ],
        prop_oneof![
            Just(Selection::All),
            "[a-z ]{1,10}".prop_map(Selection::Only),
        ],
    )
        .prop_map(|(term, status, kind)| {
            FilterState::new()
                .with_search(term)
                .with_selection("status", status)
                .with_selection("kind", kind)
        })
}

proptest! {
    #[test]
    fn result_is_order_preserving_subsequence(
        schools in schools_strategy(),
        state in state_strategy(),
    ) {
        let result = filter_records(&schools, &state);
        let mut source = schools.iter();
        for row in &result {
            // Each result row must appear in the remaining source suffix.
            prop_assert!(source.any(|candidate| std::ptr::eq(candidate, *row)));
        }
    }

    #[test]
    fn empty_state_is_identity(schools in schools_strategy()) {
        let result = filter_records(&schools, &FilterState::new());
        prop_assert_eq!(result.len(), schools.len());
        for (row, source) in result.iter().zip(schools.iter()) {
            prop_assert!(std::ptr::eq(*row, source));
        }
    }

    #[test]
    fn evaluation_is_deterministic(
        schools in schools_strategy(),
        state in state_strategy(),
    ) {
        let first: Vec<String> =
            filter_records(&schools, &state).iter().map(|row| row.name.clone()).collect();
        let second: Vec<String> =
            filter_records(&schools, &state).iter().map(|row| row.name.clone()).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn search_is_case_insensitive(schools in schools_strategy(), term in "[a-zA-Z]{1,8}") {
        let upper = FilterState::new().with_search(term.to_uppercase());
        let lower = FilterState::new().with_search(term.to_lowercase());
        let upper_names: Vec<&str> =
            filter_records(&schools, &upper).iter().map(|row| row.name.as_str()).collect();
        let lower_names: Vec<&str> =
            filter_records(&schools, &lower).iter().map(|row| row.name.as_str()).collect();
        prop_assert_eq!(upper_names, lower_names);
    }

    #[test]
    fn independent_constraints_compose(
        schools in schools_strategy(),
        term in "[a-zA-Z]{0,8}",
        status in "[a-z]{1,10}",
    ) {
        let search_only = FilterState::new().with_search(term.clone());
        let status_only =
            FilterState::new().with_selection("status", Selection::Only(status.clone()));
        let combined = FilterState::new()
            .with_search(term)
            .with_selection("status", Selection::Only(status));

        let staged: Vec<String> = filter_records(&schools, &search_only)
            .into_iter()
            .filter(|row| !filter_records(std::slice::from_ref(*row), &status_only).is_empty())
            .map(|row| row.name.clone())
            .collect();
        let direct: Vec<String> =
            filter_records(&schools, &combined).iter().map(|row| row.name.clone()).collect();
        prop_assert_eq!(staged, direct);
    }

    #[test]
    fn empty_input_always_yields_empty_output(state in state_strategy()) {
        let schools: Vec<School> = Vec::new();
        prop_assert!(filter_records(&schools, &state).is_empty());
    }
}
