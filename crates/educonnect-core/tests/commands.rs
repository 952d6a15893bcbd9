// crates/educonnect-core/tests/commands.rs
// ============================================================================
// Module: Command Desk Tests
// Description: Validate action dispatch, receipts, and notifications.
// Purpose: Ensure every outcome is notified and nothing mutates the store.
// Dependencies: educonnect-core
// ============================================================================

//! Command desk behavior tests for simulated administrative actions.

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

use std::sync::Arc;
use std::sync::Mutex;

use educonnect_core::AdminAction;
use educonnect_core::CommandDesk;
use educonnect_core::CommandError;
use educonnect_core::InMemoryDirectory;
use educonnect_core::NotificationSink;
use educonnect_core::PlatformUser;
use educonnect_core::RecordRepository;
use educonnect_core::RepositoryError;
use educonnect_core::School;
use educonnect_core::SchoolId;
use educonnect_core::Severity;
use educonnect_core::SupportTicket;
use educonnect_core::TicketId;
use educonnect_core::UserId;

type TestResult = Result<(), String>;

/// Notification sink recording every emitted message for assertions.
#[derive(Debug, Clone, Default)]
struct RecordingSink {
    /// Recorded notifications in emission order.
    events: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingSink {
    /// Returns a snapshot of the recorded notifications.
    fn events(&self) -> Vec<(Severity, String)> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, severity: Severity, message: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push((severity, message.to_string()));
        }
    }
}

#[test]
fn approving_a_pending_school_notifies_success() -> TestResult {
    let sink = RecordingSink::default();
    let desk = CommandDesk::new(InMemoryDirectory::seeded(), sink.clone());
    let riverside = SchoolId::from_raw(3).ok_or("nonzero school id")?;

    let receipt = desk
        .submit::<School>(&riverside, &AdminAction::Approve)
        .map_err(|err| err.to_string())?;
    if receipt.message != "Riverside High has been approved" {
        return Err(format!("unexpected receipt message: {}", receipt.message));
    }
    let events = sink.events();
    if events == [(Severity::Success, "Riverside High has been approved".to_string())] {
        Ok(())
    } else {
        Err(format!("unexpected notifications: {events:?}"))
    }
}

#[test]
fn missing_record_is_not_found_and_notified() -> TestResult {
    let sink = RecordingSink::default();
    let desk = CommandDesk::new(InMemoryDirectory::seeded(), sink.clone());
    let dangling = SchoolId::from_raw(999).ok_or("nonzero school id")?;

    match desk.submit::<School>(&dangling, &AdminAction::Approve) {
        Err(CommandError::Repository(RepositoryError::NotFound {
            record_id,
        })) => {
            if record_id != "999" {
                return Err(format!("unexpected record id in error: {record_id}"));
            }
        }
        other => return Err(format!("expected NotFound, got {other:?}")),
    }
    let events = sink.events();
    match events.as_slice() {
        [(Severity::Error, message)] if message.contains("not found") => Ok(()),
        _ => Err(format!("expected one error notification, got {events:?}")),
    }
}

#[test]
fn blank_reply_is_a_validation_error() -> TestResult {
    let sink = RecordingSink::default();
    let desk = CommandDesk::new(InMemoryDirectory::seeded(), sink.clone());
    let ticket = TicketId::new("TKT-1001");
    let action = AdminAction::Reply {
        message: "   ".to_string(),
    };

    match desk.submit::<SupportTicket>(&ticket, &action) {
        Err(CommandError::Validation(reason)) => {
            if !reason.contains("non-blank") {
                return Err(format!("unexpected validation reason: {reason}"));
            }
        }
        other => return Err(format!("expected Validation, got {other:?}")),
    }
    let events = sink.events();
    match events.as_slice() {
        [(Severity::Error, _)] => Ok(()),
        _ => Err(format!("expected one error notification, got {events:?}")),
    }
}

#[test]
fn reply_on_a_school_is_unsupported() -> TestResult {
    let desk = CommandDesk::new(InMemoryDirectory::seeded(), RecordingSink::default());
    let springfield = SchoolId::from_raw(1).ok_or("nonzero school id")?;
    let action = AdminAction::Reply {
        message: "hello".to_string(),
    };

    match desk.submit::<School>(&springfield, &action) {
        Err(CommandError::Repository(RepositoryError::Unsupported {
            action,
            domain,
        })) => {
            if action == "reply" && domain == "school" {
                Ok(())
            } else {
                Err(format!("unexpected unsupported labels: {action}/{domain}"))
            }
        }
        other => Err(format!("expected Unsupported, got {other:?}")),
    }
}

#[test]
fn password_reset_reports_the_target_email() -> TestResult {
    let sink = RecordingSink::default();
    let desk = CommandDesk::new(InMemoryDirectory::seeded(), sink.clone());
    let priya = UserId::from_raw(2).ok_or("nonzero user id")?;

    let receipt = desk
        .submit::<PlatformUser>(&priya, &AdminAction::ResetPassword)
        .map_err(|err| err.to_string())?;
    if receipt.message == "Password reset email sent to priya@email.com" {
        Ok(())
    } else {
        Err(format!("unexpected receipt message: {}", receipt.message))
    }
}

#[test]
fn resolving_a_ticket_notifies_success() -> TestResult {
    let sink = RecordingSink::default();
    let desk = CommandDesk::new(InMemoryDirectory::seeded(), sink.clone());
    let ticket = TicketId::new("TKT-1004");

    desk.submit::<SupportTicket>(&ticket, &AdminAction::Resolve)
        .map_err(|err| err.to_string())?;
    let events = sink.events();
    match events.as_slice() {
        [(Severity::Success, message)] if message.contains("TKT-1004") => Ok(()),
        _ => Err(format!("expected one success notification, got {events:?}")),
    }
}

#[test]
fn actions_never_mutate_the_backing_sequence() -> TestResult {
    let directory = InMemoryDirectory::seeded();
    let before: Vec<School> =
        RecordRepository::<School>::list(&directory).map_err(|err| err.to_string())?;
    let desk = CommandDesk::new(directory.clone(), RecordingSink::default());
    let riverside = SchoolId::from_raw(3).ok_or("nonzero school id")?;

    desk.submit::<School>(&riverside, &AdminAction::Approve).map_err(|err| err.to_string())?;
    desk.submit::<School>(&riverside, &AdminAction::Suspend).map_err(|err| err.to_string())?;

    let after: Vec<School> =
        RecordRepository::<School>::list(&directory).map_err(|err| err.to_string())?;
    if before == after {
        Ok(())
    } else {
        Err("record sequence changed after simulated actions".to_string())
    }
}
