// crates/educonnect-core/src/runtime/pagination.rs
// ============================================================================
// Module: EduConnect Pagination
// Description: Offset-cursor pagination over filtered record sequences.
// Purpose: Bound result sizes for hosts that render large directories.
// Dependencies: crate::core::filter, serde, serde_json
// ============================================================================

//! ## Overview
//! The source views render entire arrays; this module supplies the policy
//! the original leaves undefined. Pagination applies after filtering: the
//! cursor is an opaque JSON offset payload, limits are clamped to
//! [`MAX_PAGE_LIMIT`], and an exhausted sequence yields no next cursor.
//! Cursors are untrusted input and fail closed on decode errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::filter::FilterError;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum rows returned by a single page.
pub const MAX_PAGE_LIMIT: usize = 500;
/// Maximum accepted byte length of an encoded cursor.
const MAX_CURSOR_BYTES: usize = 256;

// ============================================================================
// SECTION: Cursor
// ============================================================================

/// Opaque pagination cursor carrying the next offset.
///
/// # Invariants
/// - Encodes as a stable JSON payload; decoding rejects oversized or
///   malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    /// Offset of the first row in the next page.
    offset: usize,
}

impl PageCursor {
    /// Creates a cursor positioned at the given row offset.
    #[must_use]
    pub const fn new(offset: usize) -> Self {
        Self {
            offset,
        }
    }

    /// Encodes the cursor into its opaque wire form.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCursor`] when serialization fails.
    pub fn encode(&self) -> Result<String, FilterError> {
        serde_json::to_string(self).map_err(|err| FilterError::InvalidCursor(err.to_string()))
    }

    /// Decodes a cursor from its opaque wire form.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCursor`] when the payload is oversized
    /// or malformed.
    pub fn decode(encoded: &str) -> Result<Self, FilterError> {
        if encoded.len() > MAX_CURSOR_BYTES {
            return Err(FilterError::InvalidCursor(format!(
                "cursor exceeds {MAX_CURSOR_BYTES} bytes ({} bytes)",
                encoded.len()
            )));
        }
        serde_json::from_str(encoded).map_err(|err| FilterError::InvalidCursor(err.to_string()))
    }

    /// Returns the offset carried by the cursor.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }
}

// ============================================================================
// SECTION: Pages
// ============================================================================

/// One page of a filtered record sequence.
///
/// # Invariants
/// - `rows` preserves the relative order of the input sequence.
/// - `next_cursor` is `None` when the sequence is exhausted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPage<'a, R> {
    /// Rows in this page, in source order.
    pub rows: Vec<&'a R>,
    /// Total matching rows before pagination.
    pub total: usize,
    /// Cursor for the next page, when more rows remain.
    pub next_cursor: Option<String>,
}

/// Paginates an already-filtered row sequence.
///
/// `limit` is clamped to [`MAX_PAGE_LIMIT`]; a zero limit yields an empty
/// page that still reports the total and the position of the next row.
///
/// # Errors
///
/// Returns [`FilterError::InvalidCursor`] when the cursor cannot be decoded
/// or re-encoded.
pub fn paginate<'a, R>(
    rows: &[&'a R],
    cursor: Option<&str>,
    limit: usize,
) -> Result<RecordPage<'a, R>, FilterError> {
    let offset = match cursor {
        Some(encoded) => PageCursor::decode(encoded)?.offset(),
        None => 0,
    };
    let limit = limit.min(MAX_PAGE_LIMIT);
    let total = rows.len();
    let start = offset.min(total);
    let end = start.saturating_add(limit).min(total);
    let next_cursor = if end < total {
        Some(
            PageCursor {
                offset: end,
            }
            .encode()?,
        )
    } else {
        None
    };
    Ok(RecordPage {
        rows: rows[start .. end].to_vec(),
        total,
        next_cursor,
    })
}
