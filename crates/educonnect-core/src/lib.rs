// crates/educonnect-core/src/lib.rs
// ============================================================================
// Module: EduConnect Core
// Description: Domain records, filter evaluation, and administrative commands.
// Purpose: Provide the backend-agnostic core for EduConnect management views.
// Dependencies: serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! `educonnect-core` is the headless core behind the EduConnect admin
//! dashboard: typed records for schools, vendors, platform users, and support
//! tickets; a pure tabular filter/search evaluator; repository and
//! notification interfaces; and a command desk for simulated administrative
//! actions. The core performs no I/O and never reads wall-clock time; hosts
//! supply records and receive receipts through the interface seams.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use self::core::filter::FilterError;
pub use self::core::filter::FilterField;
pub use self::core::filter::FilterState;
pub use self::core::filter::MAX_SEARCH_TERM_BYTES;
pub use self::core::filter::MAX_SELECTION_BYTES;
pub use self::core::filter::Selection;
pub use self::core::filter::TableRecord;
pub use self::core::identifiers::SchoolId;
pub use self::core::identifiers::TicketId;
pub use self::core::identifiers::UserId;
pub use self::core::identifiers::VendorId;
pub use self::core::records::PlatformUser;
pub use self::core::records::School;
pub use self::core::records::SchoolKind;
pub use self::core::records::SchoolStatus;
pub use self::core::records::SupportTicket;
pub use self::core::records::TicketCategory;
pub use self::core::records::TicketPriority;
pub use self::core::records::TicketStatus;
pub use self::core::records::UserRole;
pub use self::core::records::UserStatus;
pub use self::core::records::Vendor;
pub use self::core::records::VendorCategory;
pub use self::core::records::VendorStatus;
pub use self::core::summary::DirectorySummary;
pub use self::core::summary::SchoolSummary;
pub use self::core::summary::TicketSummary;
pub use self::core::summary::UserSummary;
pub use self::core::summary::VendorSummary;
pub use self::core::summary::summarize_directory;
pub use self::core::summary::summarize_schools;
pub use self::core::summary::summarize_tickets;
pub use self::core::summary::summarize_users;
pub use self::core::summary::summarize_vendors;
pub use interfaces::ActionReceipt;
pub use interfaces::NoopNotifications;
pub use interfaces::NotificationSink;
pub use interfaces::RecordRepository;
pub use interfaces::RepositoryError;
pub use interfaces::Severity;
pub use runtime::commands::AdminAction;
pub use runtime::commands::CommandDesk;
pub use runtime::commands::CommandError;
pub use runtime::commands::MAX_REPLY_MESSAGE_BYTES;
pub use runtime::evaluator::filter_records;
pub use runtime::evaluator::matches_record;
pub use runtime::memory::InMemoryDirectory;
pub use runtime::pagination::MAX_PAGE_LIMIT;
pub use runtime::pagination::PageCursor;
pub use runtime::pagination::RecordPage;
pub use runtime::pagination::paginate;
