// crates/educonnect-core/src/runtime/commands.rs
// ============================================================================
// Module: EduConnect Command Desk
// Description: Administrative action dispatch with a notification side channel.
// Purpose: Route user-intent callbacks through validation, repository, and sink.
// Dependencies: crate::core, crate::interfaces, serde, thiserror
// ============================================================================

//! ## Overview
//! The command desk is the view-to-host contract: each management view
//! exposes user-intent callbacks (approve, reject, suspend, reply, ...) that
//! resolve to `submit(record_id, action)` here. Actions are validated,
//! delegated to the injected repository, and every outcome is echoed to the
//! notification sink so business logic and presentation stay independently
//! testable. A dangling record identifier is an error, not a silent no-op.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::filter::TableRecord;
use crate::interfaces::ActionReceipt;
use crate::interfaces::NotificationSink;
use crate::interfaces::RecordRepository;
use crate::interfaces::RepositoryError;
use crate::interfaces::Severity;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Maximum accepted byte length of a ticket reply message.
pub const MAX_REPLY_MESSAGE_BYTES: usize = 4096;

// ============================================================================
// SECTION: Actions
// ============================================================================

/// Administrative actions exposed by the management views.
///
/// # Invariants
/// - Variants are stable for serialization and receipt labeling.
/// - Applying an action never mutates the backing record sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdminAction {
    /// Approve a pending registration.
    Approve,
    /// Reject a pending registration.
    Reject,
    /// Suspend an active school.
    Suspend,
    /// Deactivate a user account.
    Deactivate,
    /// Send a password reset email to a user.
    ResetPassword,
    /// Mark a support ticket resolved.
    Resolve,
    /// Reply on a support ticket thread.
    Reply {
        /// Reply message body.
        message: String,
    },
}

impl AdminAction {
    /// Returns the stable label for the action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Suspend => "suspend",
            Self::Deactivate => "deactivate",
            Self::ResetPassword => "reset-password",
            Self::Resolve => "resolve",
            Self::Reply {
                ..
            } => "reply",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Command Errors
// ============================================================================

/// Command desk errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Action payload failed validation before dispatch.
    #[error("invalid action: {0}")]
    Validation(String),
    /// Repository rejected the action.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

// ============================================================================
// SECTION: Command Desk
// ============================================================================

/// Action dispatcher wiring a repository to a notification sink.
///
/// # Invariants
/// - Every submitted action produces exactly one notification: success on a
///   receipt, error on any failure.
#[derive(Debug, Clone)]
pub struct CommandDesk<P, N> {
    /// Injected record repository.
    repository: P,
    /// Injected notification sink.
    notifications: N,
}

impl<P, N> CommandDesk<P, N>
where
    N: NotificationSink,
{
    /// Creates a command desk over the given repository and sink.
    #[must_use]
    pub const fn new(repository: P, notifications: N) -> Self {
        Self {
            repository,
            notifications,
        }
    }

    /// Returns the injected repository.
    pub const fn repository(&self) -> &P {
        &self.repository
    }

    /// Submits an administrative action for the identified record.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Validation`] when the action payload is
    /// malformed and [`CommandError::Repository`] when the record is missing
    /// or the action is unsupported for its domain. Failures are also echoed
    /// to the notification sink with [`Severity::Error`].
    pub fn submit<R>(
        &self,
        record_id: &R::Id,
        action: &AdminAction,
    ) -> Result<ActionReceipt, CommandError>
    where
        R: TableRecord,
        P: RecordRepository<R>,
    {
        if let Err(reason) = validate_action(action) {
            self.notifications.notify(Severity::Error, &reason);
            return Err(CommandError::Validation(reason));
        }
        match self.repository.apply_action(record_id, action) {
            Ok(receipt) => {
                self.notifications.notify(Severity::Success, &receipt.message);
                Ok(receipt)
            }
            Err(err) => {
                self.notifications.notify(Severity::Error, &err.to_string());
                Err(CommandError::Repository(err))
            }
        }
    }
}

/// Validates an action payload before dispatch.
fn validate_action(action: &AdminAction) -> Result<(), String> {
    if let AdminAction::Reply {
        message,
    } = action
    {
        if message.trim().is_empty() {
            return Err("reply message must be non-blank".to_string());
        }
        if message.len() > MAX_REPLY_MESSAGE_BYTES {
            return Err(format!(
                "reply message exceeds {MAX_REPLY_MESSAGE_BYTES} bytes ({} bytes)",
                message.len()
            ));
        }
    }
    Ok(())
}
