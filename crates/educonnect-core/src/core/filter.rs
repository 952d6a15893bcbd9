// crates/educonnect-core/src/core/filter.rs
// ============================================================================
// Module: EduConnect Filter State
// Description: Free-text search plus categorical selections for table views.
// Purpose: Model per-view filter state as explicit, validated data.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Every management view carries the same filter shape: one free-text search
//! term and zero or more categorical selections keyed by field name. The
//! state is explicit and decoupled from rendering so the evaluator can be
//! exercised without a UI harness. Filter input is untrusted and validated
//! at the boundary; evaluation itself is total and never fails.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted byte length of a search term.
pub const MAX_SEARCH_TERM_BYTES: usize = 256;
/// Maximum accepted byte length of a categorical selection value.
pub const MAX_SELECTION_BYTES: usize = 128;
/// Reserved sentinel meaning "no constraint" at input boundaries.
const ALL_SENTINEL: &str = "all";

// ============================================================================
// SECTION: Filter Fields
// ============================================================================

/// Name of a categorical field a selection constrains (for example `status`).
///
/// # Invariants
/// - Opaque UTF-8 string; matching against record fields is by exact name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterField(String);

impl FilterField {
    /// Creates a new filter field name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the field name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for FilterField {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FilterField {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Selections
// ============================================================================

/// Categorical selection for one field.
///
/// # Invariants
/// - `All` means no constraint; `Only` holds the selected label verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Selection {
    /// No constraint for this field.
    All,
    /// Records must carry this label (case-insensitive equality).
    Only(String),
}

impl Selection {
    /// Parses a dropdown-style value, mapping the `all` sentinel to no
    /// constraint.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(ALL_SENTINEL) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Returns true when the selection imposes no constraint.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

// ============================================================================
// SECTION: Filter Errors
// ============================================================================

/// Validation errors for malformed filter input.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Search term exceeds the accepted length.
    #[error("search term too long: {actual_bytes} bytes (max {max_bytes})")]
    SearchTermTooLong {
        /// Maximum accepted bytes.
        max_bytes: usize,
        /// Actual term length in bytes.
        actual_bytes: usize,
    },
    /// A categorical field name is blank.
    #[error("filter field name must be non-blank")]
    BlankFieldName,
    /// A selection value is blank or exceeds the accepted length.
    #[error("selection for field '{field}' is invalid: {reason}")]
    InvalidSelection {
        /// Offending field name.
        field: String,
        /// Validation failure description.
        reason: String,
    },
    /// A pagination cursor could not be decoded.
    #[error("invalid page cursor: {0}")]
    InvalidCursor(String),
}

// ============================================================================
// SECTION: Filter State
// ============================================================================

/// Filter state for one management view.
///
/// # Invariants
/// - Owned exclusively by its view; initialized empty and discarded on
///   unmount. No persistence across sessions.
/// - An empty search term and all-`All` selections mean no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search term; empty means no text constraint.
    pub search_term: String,
    /// Categorical selections keyed by field name.
    pub selections: BTreeMap<FilterField, Selection>,
}

impl FilterState {
    /// Creates an empty filter state (no constraints).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with the given search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Returns a copy with a selection for the given field.
    #[must_use]
    pub fn with_selection(mut self, field: impl Into<FilterField>, selection: Selection) -> Self {
        self.selections.insert(field.into(), selection);
        self
    }

    /// Returns true when no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.selections.values().all(Selection::is_all)
    }

    /// Validates filter input against defensive limits.
    ///
    /// Evaluation tolerates any state; this guard exists so hosts can reject
    /// malformed input at the boundary instead of silently matching nothing.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when the search term or a selection violates
    /// the documented limits, a field name is blank, or a selection value
    /// spells the reserved `all` sentinel (callers must use
    /// [`Selection::All`]).
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.search_term.len() > MAX_SEARCH_TERM_BYTES {
            return Err(FilterError::SearchTermTooLong {
                max_bytes: MAX_SEARCH_TERM_BYTES,
                actual_bytes: self.search_term.len(),
            });
        }
        for (field, selection) in &self.selections {
            if field.as_str().trim().is_empty() {
                return Err(FilterError::BlankFieldName);
            }
            if let Selection::Only(value) = selection {
                if value.trim().is_empty() {
                    return Err(FilterError::InvalidSelection {
                        field: field.as_str().to_string(),
                        reason: "value must be non-blank".to_string(),
                    });
                }
                if value.len() > MAX_SELECTION_BYTES {
                    return Err(FilterError::InvalidSelection {
                        field: field.as_str().to_string(),
                        reason: format!(
                            "value exceeds {MAX_SELECTION_BYTES} bytes ({} bytes)",
                            value.len()
                        ),
                    });
                }
                if value.eq_ignore_ascii_case(ALL_SENTINEL) {
                    return Err(FilterError::InvalidSelection {
                        field: field.as_str().to_string(),
                        reason: "reserved sentinel 'all' must be expressed as Selection::All"
                            .to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Table Record Seam
// ============================================================================

/// Contract between directory records and the filter evaluator.
///
/// Implementations designate which text fields the search term scans and map
/// categorical field names to stable labels. Unknown field names return
/// `None`, which fails to match without raising an error.
pub trait TableRecord {
    /// Identifier type for the record.
    type Id: Clone + PartialEq + fmt::Display;

    /// Returns the record identifier.
    fn record_id(&self) -> &Self::Id;

    /// Returns the human-readable name used in receipts and notifications.
    fn display_name(&self) -> &str;

    /// Returns the designated text fields scanned by the search term.
    fn search_fields(&self) -> Vec<&str>;

    /// Returns the label for a categorical field, or `None` when the record
    /// does not carry that field.
    fn categorical_value(&self, field: &FilterField) -> Option<&str>;
}
