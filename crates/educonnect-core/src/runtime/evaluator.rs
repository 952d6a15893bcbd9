// crates/educonnect-core/src/runtime/evaluator.rs
// ============================================================================
// Module: EduConnect Filter Evaluator
// Description: Pure filter/search projection over record sequences.
// Purpose: Produce the filtered subsequence a management view renders.
// Dependencies: crate::core::filter
// ============================================================================

//! ## Overview
//! The evaluator is a pure projection: given an ordered record sequence and a
//! filter state it returns the matching subsequence, preserving the original
//! relative order. It is recomputed synchronously on every state change, has
//! no side effects on the source data, and defines no failure modes: unknown
//! categorical fields simply fail to match.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::filter::FilterState;
use crate::core::filter::Selection;
use crate::core::filter::TableRecord;

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Filters a record sequence by the given state.
///
/// The result is always an order-preserving subsequence of `records`; an
/// empty result is valid and renders as a "0 results" state. Same inputs
/// always produce the same output.
#[must_use]
pub fn filter_records<'a, R: TableRecord>(records: &'a [R], state: &FilterState) -> Vec<&'a R> {
    records.iter().filter(|record| matches_record(*record, state)).collect()
}

/// Returns true when a single record satisfies the filter state.
///
/// A record is retained iff the search term is empty or its lowercase form
/// is a substring of the lowercase form of at least one designated search
/// field, and every non-`All` selection equals the record's categorical
/// label case-insensitively.
#[must_use]
pub fn matches_record<R: TableRecord>(record: &R, state: &FilterState) -> bool {
    matches_search(record, &state.search_term) && matches_selections(record, state)
}

/// Evaluates the free-text search constraint.
fn matches_search<R: TableRecord>(record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Evaluates every categorical selection constraint.
fn matches_selections<R: TableRecord>(record: &R, state: &FilterState) -> bool {
    state.selections.iter().all(|(field, selection)| match selection {
        Selection::All => true,
        Selection::Only(value) => record
            .categorical_value(field)
            .is_some_and(|label| label.to_lowercase() == value.to_lowercase()),
    })
}
