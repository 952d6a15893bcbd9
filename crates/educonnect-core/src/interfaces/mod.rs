// crates/educonnect-core/src/interfaces/mod.rs
// ============================================================================
// Module: EduConnect Interfaces
// Description: Backend-agnostic interfaces for record access and notifications.
// Purpose: Define the contract surfaces between the core and its hosts.
// Dependencies: crate::core, crate::runtime::commands, serde, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the admin core integrates with a backing store and
//! a user-feedback channel without embedding backend-specific details. The
//! shipped repository is in-memory; a real backend would implement the same
//! traits. Implementations must be deterministic and fail closed on missing
//! records.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::filter::TableRecord;
use crate::runtime::commands::AdminAction;

// ============================================================================
// SECTION: Repository Errors
// ============================================================================

/// Record repository errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The referenced record is no longer present in the sequence.
    #[error("record not found: {record_id}")]
    NotFound {
        /// Identifier that failed to resolve, rendered for display.
        record_id: String,
    },
    /// The action is not defined for the record domain.
    #[error("action '{action}' is not supported for {domain} records")]
    Unsupported {
        /// Action label.
        action: String,
        /// Record domain label (for example `school`).
        domain: String,
    },
    /// Backing store reported an error.
    #[error("record store error: {0}")]
    Storage(String),
}

// ============================================================================
// SECTION: Action Receipts
// ============================================================================

/// Receipt for a simulated administrative action.
///
/// # Invariants
/// - `message` is safe for direct display in a toast or terminal line.
/// - Issuing a receipt never mutates the backing record sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionReceipt {
    /// Display name of the affected record.
    pub record_name: String,
    /// Stable label of the applied action.
    pub action: String,
    /// Human-readable confirmation message.
    pub message: String,
}

// ============================================================================
// SECTION: Record Repository
// ============================================================================

/// Backend-agnostic record repository for one record domain.
///
/// The core ships an in-memory implementation seeded with sample rows; real
/// deployments substitute a store-backed implementation behind the same
/// trait.
pub trait RecordRepository<R: TableRecord> {
    /// Returns the full ordered record sequence.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the backing store cannot be read.
    fn list(&self) -> Result<Vec<R>, RepositoryError>;

    /// Applies a simulated administrative action to a record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] when the identifier does not
    /// resolve and [`RepositoryError::Unsupported`] when the action is not
    /// defined for the record domain.
    fn apply_action(
        &self,
        record_id: &R::Id,
        action: &AdminAction,
    ) -> Result<ActionReceipt, RepositoryError>;
}

// ============================================================================
// SECTION: Notification Sink
// ============================================================================

/// Severity channel for user-facing notifications.
///
/// # Invariants
/// - Variants are stable for programmatic handling and display mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Action completed successfully.
    Success,
    /// Informational message.
    Info,
    /// Action failed.
    Error,
}

impl Severity {
    /// Returns a stable label for the severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// User-feedback channel for administrative actions.
///
/// Hosts map notifications onto their presentation surface (toast, terminal
/// line, log). Implementations must not fail; delivery is best-effort.
pub trait NotificationSink {
    /// Emits a notification with the given severity.
    fn notify(&self, severity: Severity, message: &str);
}

/// No-op notification sink.
///
/// # Invariants
/// - Notifications are intentionally discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifications;

impl NotificationSink for NoopNotifications {
    fn notify(&self, _severity: Severity, _message: &str) {}
}
