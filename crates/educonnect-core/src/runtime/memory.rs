// crates/educonnect-core/src/runtime/memory.rs
// ============================================================================
// Module: EduConnect In-Memory Directory
// Description: Fake backing store seeded with the platform sample rows.
// Purpose: Back the repository seam without persistence or I/O.
// Dependencies: crate::core, crate::interfaces, crate::runtime::commands, time
// ============================================================================

//! ## Overview
//! The in-memory directory is the session-scoped backing store: fixed
//! ordered record sequences loaded at construction and never mutated.
//! Administrative actions resolve the target, check domain/action
//! compatibility, and produce a receipt; rejection and approval alike leave
//! the sequences untouched. The directory is `Arc`-shared so command desks
//! and views can hold cheap clones.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU64;
use std::sync::Arc;

use time::macros::date;
use time::macros::datetime;

use crate::core::identifiers::SchoolId;
use crate::core::identifiers::TicketId;
use crate::core::identifiers::UserId;
use crate::core::identifiers::VendorId;
use crate::core::records::PlatformUser;
use crate::core::records::School;
use crate::core::records::SchoolKind;
use crate::core::records::SchoolStatus;
use crate::core::records::SupportTicket;
use crate::core::records::TicketCategory;
use crate::core::records::TicketPriority;
use crate::core::records::TicketStatus;
use crate::core::records::UserRole;
use crate::core::records::UserStatus;
use crate::core::records::Vendor;
use crate::core::records::VendorCategory;
use crate::core::records::VendorStatus;
use crate::interfaces::ActionReceipt;
use crate::interfaces::RecordRepository;
use crate::interfaces::RepositoryError;
use crate::runtime::commands::AdminAction;

// ============================================================================
// SECTION: Directory
// ============================================================================

/// Shared record sequences held by the directory.
#[derive(Debug)]
struct DirectoryInner {
    /// School directory rows.
    schools: Vec<School>,
    /// Vendor directory rows.
    vendors: Vec<Vendor>,
    /// Platform user rows.
    users: Vec<PlatformUser>,
    /// Support ticket rows.
    tickets: Vec<SupportTicket>,
}

/// In-memory record repository for all four directory domains.
///
/// # Invariants
/// - Record sequences are fixed at construction and never mutated.
/// - Clones share the same backing sequences.
#[derive(Debug, Clone)]
pub struct InMemoryDirectory {
    /// Shared backing sequences.
    inner: Arc<DirectoryInner>,
}

impl InMemoryDirectory {
    /// Creates a directory over the given record sequences.
    #[must_use]
    pub fn new(
        schools: Vec<School>,
        vendors: Vec<Vendor>,
        users: Vec<PlatformUser>,
        tickets: Vec<SupportTicket>,
    ) -> Self {
        Self {
            inner: Arc::new(DirectoryInner {
                schools,
                vendors,
                users,
                tickets,
            }),
        }
    }

    /// Creates a directory loaded with the platform sample rows.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_schools(), seed_vendors(), seed_users(), seed_tickets())
    }

    /// Returns the school sequence.
    #[must_use]
    pub fn schools(&self) -> &[School] {
        &self.inner.schools
    }

    /// Returns the vendor sequence.
    #[must_use]
    pub fn vendors(&self) -> &[Vendor] {
        &self.inner.vendors
    }

    /// Returns the platform user sequence.
    #[must_use]
    pub fn users(&self) -> &[PlatformUser] {
        &self.inner.users
    }

    /// Returns the support ticket sequence.
    #[must_use]
    pub fn tickets(&self) -> &[SupportTicket] {
        &self.inner.tickets
    }
}

// ============================================================================
// SECTION: Repository Implementations
// ============================================================================

impl RecordRepository<School> for InMemoryDirectory {
    fn list(&self) -> Result<Vec<School>, RepositoryError> {
        Ok(self.inner.schools.clone())
    }

    fn apply_action(
        &self,
        record_id: &SchoolId,
        action: &AdminAction,
    ) -> Result<ActionReceipt, RepositoryError> {
        let school = self
            .inner
            .schools
            .iter()
            .find(|school| school.id == *record_id)
            .ok_or_else(|| RepositoryError::NotFound {
                record_id: record_id.to_string(),
            })?;
        let message = match action {
            AdminAction::Approve => format!("{} has been approved", school.name),
            AdminAction::Reject => format!("{} has been rejected", school.name),
            AdminAction::Suspend => format!("{} has been suspended", school.name),
            _ => return Err(unsupported(action, "school")),
        };
        Ok(receipt(&school.name, action, message))
    }
}

impl RecordRepository<Vendor> for InMemoryDirectory {
    fn list(&self) -> Result<Vec<Vendor>, RepositoryError> {
        Ok(self.inner.vendors.clone())
    }

    fn apply_action(
        &self,
        record_id: &VendorId,
        action: &AdminAction,
    ) -> Result<ActionReceipt, RepositoryError> {
        let vendor = self
            .inner
            .vendors
            .iter()
            .find(|vendor| vendor.id == *record_id)
            .ok_or_else(|| RepositoryError::NotFound {
                record_id: record_id.to_string(),
            })?;
        let message = match action {
            AdminAction::Approve => format!("{} has been approved", vendor.name),
            AdminAction::Reject => format!("{} has been rejected", vendor.name),
            _ => return Err(unsupported(action, "vendor")),
        };
        Ok(receipt(&vendor.name, action, message))
    }
}

impl RecordRepository<PlatformUser> for InMemoryDirectory {
    fn list(&self) -> Result<Vec<PlatformUser>, RepositoryError> {
        Ok(self.inner.users.clone())
    }

    fn apply_action(
        &self,
        record_id: &UserId,
        action: &AdminAction,
    ) -> Result<ActionReceipt, RepositoryError> {
        let user = self
            .inner
            .users
            .iter()
            .find(|user| user.id == *record_id)
            .ok_or_else(|| RepositoryError::NotFound {
                record_id: record_id.to_string(),
            })?;
        let message = match action {
            AdminAction::Deactivate => format!("{}'s account has been deactivated", user.name),
            AdminAction::ResetPassword => {
                format!("Password reset email sent to {}", user.email)
            }
            _ => return Err(unsupported(action, "user")),
        };
        Ok(receipt(&user.name, action, message))
    }
}

impl RecordRepository<SupportTicket> for InMemoryDirectory {
    fn list(&self) -> Result<Vec<SupportTicket>, RepositoryError> {
        Ok(self.inner.tickets.clone())
    }

    fn apply_action(
        &self,
        record_id: &TicketId,
        action: &AdminAction,
    ) -> Result<ActionReceipt, RepositoryError> {
        let ticket = self
            .inner
            .tickets
            .iter()
            .find(|ticket| ticket.id == *record_id)
            .ok_or_else(|| RepositoryError::NotFound {
                record_id: record_id.to_string(),
            })?;
        let message = match action {
            AdminAction::Reply {
                ..
            } => format!("Reply sent on {}", ticket.id),
            AdminAction::Resolve => format!("{} has been marked resolved", ticket.id),
            _ => return Err(unsupported(action, "ticket")),
        };
        Ok(receipt(&ticket.subject, action, message))
    }
}

/// Builds an unsupported-action error for a record domain.
fn unsupported(action: &AdminAction, domain: &str) -> RepositoryError {
    RepositoryError::Unsupported {
        action: action.as_str().to_string(),
        domain: domain.to_string(),
    }
}

/// Builds an action receipt with a display message.
fn receipt(record_name: &str, action: &AdminAction, message: String) -> ActionReceipt {
    ActionReceipt {
        record_name: record_name.to_string(),
        action: action.as_str().to_string(),
        message,
    }
}

// ============================================================================
// SECTION: Seed Data
// ============================================================================

/// Builds a non-zero identifier from a 1-based seed ordinal.
fn seed_ordinal(raw: u64) -> NonZeroU64 {
    NonZeroU64::MIN.saturating_add(raw.saturating_sub(1))
}

/// Sample school rows from the platform directory.
fn seed_schools() -> Vec<School> {
    let rows = [
        (1, "Springfield Academy", SchoolKind::Primary, "North", SchoolStatus::Active, true, 45, "principal@springfield.edu"),
        (2, "Green Valley School", SchoolKind::Secondary, "South", SchoolStatus::Active, true, 32, "admin@greenvalley.edu"),
        (3, "Riverside High", SchoolKind::HigherSecondary, "East", SchoolStatus::Pending, false, 0, "info@riverside.edu"),
        (4, "Sunset International", SchoolKind::International, "West", SchoolStatus::Active, true, 78, "contact@sunset.edu"),
        (5, "Oakwood Public School", SchoolKind::Primary, "Central", SchoolStatus::Active, true, 56, "hello@oakwood.edu"),
        (6, "Maple Leaf Academy", SchoolKind::Secondary, "North", SchoolStatus::Suspended, false, 0, "support@maple.edu"),
        (7, "Blue Ridge School", SchoolKind::Primary, "South", SchoolStatus::Pending, false, 0, "admin@blueridge.edu"),
        (8, "Cedar Grove Institute", SchoolKind::HigherSecondary, "East", SchoolStatus::Active, true, 89, "info@cedar.edu"),
    ];
    rows.into_iter()
        .map(|(id, name, kind, region, status, verified, admissions, contact)| School {
            id: SchoolId::new(seed_ordinal(id)),
            name: name.to_string(),
            kind,
            region: region.to_string(),
            status,
            verified,
            admissions,
            contact: contact.to_string(),
        })
        .collect()
}

/// Sample vendor rows from the platform directory.
fn seed_vendors() -> Vec<Vendor> {
    vec![
        Vendor {
            id: VendorId::new(seed_ordinal(1)),
            name: "TechBooks Inc".to_string(),
            category: VendorCategory::BooksStationery,
            contact: "John Smith".to_string(),
            email: "contact@techbooks.com".to_string(),
            phone: "+1 555-1234".to_string(),
            rating: 4.5,
            orders: 234,
            products: 156,
            status: VendorStatus::Active,
            verified: true,
            joined: date!(2024 - 05 - 15),
        },
        Vendor {
            id: VendorId::new(seed_ordinal(2)),
            name: "Smart Uniforms Ltd".to_string(),
            category: VendorCategory::Uniforms,
            contact: "Sarah Johnson".to_string(),
            email: "info@smartuniforms.com".to_string(),
            phone: "+1 555-5678".to_string(),
            rating: 4.8,
            orders: 189,
            products: 45,
            status: VendorStatus::Pending,
            verified: false,
            joined: date!(2025 - 10 - 20),
        },
        Vendor {
            id: VendorId::new(seed_ordinal(3)),
            name: "Digital Learning Solutions".to_string(),
            category: VendorCategory::Technology,
            contact: "Mike Chen".to_string(),
            email: "support@digitallearn.com".to_string(),
            phone: "+1 555-9012".to_string(),
            rating: 4.7,
            orders: 312,
            products: 89,
            status: VendorStatus::Active,
            verified: true,
            joined: date!(2024 - 03 - 10),
        },
        Vendor {
            id: VendorId::new(seed_ordinal(4)),
            name: "Fresh Meals Catering".to_string(),
            category: VendorCategory::FoodServices,
            contact: "Maria Garcia".to_string(),
            email: "orders@freshmeals.com".to_string(),
            phone: "+1 555-3456".to_string(),
            rating: 4.3,
            orders: 445,
            products: 23,
            status: VendorStatus::Active,
            verified: true,
            joined: date!(2024 - 01 - 25),
        },
        Vendor {
            id: VendorId::new(seed_ordinal(5)),
            name: "Safe Transport Co".to_string(),
            category: VendorCategory::Transportation,
            contact: "David Wilson".to_string(),
            email: "contact@safetransport.com".to_string(),
            phone: "+1 555-7890".to_string(),
            rating: 4.6,
            orders: 178,
            products: 12,
            status: VendorStatus::Inactive,
            verified: true,
            joined: date!(2023 - 11 - 05),
        },
    ]
}

/// Sample platform user rows.
fn seed_users() -> Vec<PlatformUser> {
    let rows = [
        (1, "Rajesh Kumar", "rajesh@email.com", UserRole::Parent, UserStatus::Active, date!(2024 - 01 - 15), 145, false),
        (2, "Priya Singh", "priya@email.com", UserRole::Teacher, UserStatus::Active, date!(2024 - 02 - 10), 289, false),
        (3, "Amit Patel", "amit@email.com", UserRole::Student, UserStatus::Active, date!(2024 - 03 - 05), 67, false),
        (4, "Sneha Gupta", "sneha@email.com", UserRole::Parent, UserStatus::Active, date!(2024 - 01 - 20), 234, true),
        (5, "Vikram Sharma", "vikram@email.com", UserRole::Teacher, UserStatus::Inactive, date!(2023 - 11 - 12), 45, false),
        (6, "Ananya Roy", "ananya@email.com", UserRole::Student, UserStatus::Active, date!(2024 - 04 - 01), 123, false),
        (7, "Rahul Verma", "rahul@email.com", UserRole::Parent, UserStatus::Active, date!(2024 - 02 - 28), 178, false),
        (8, "Kavya Reddy", "kavya@email.com", UserRole::Teacher, UserStatus::Active, date!(2024 - 03 - 15), 201, true),
    ];
    rows.into_iter()
        .map(|(id, name, email, role, status, joined, login_count, flagged)| PlatformUser {
            id: UserId::new(seed_ordinal(id)),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            joined,
            login_count,
            flagged,
        })
        .collect()
}

/// Sample support ticket rows.
fn seed_tickets() -> Vec<SupportTicket> {
    vec![
        SupportTicket {
            id: TicketId::new("TKT-1001"),
            subject: "Unable to approve school registration".to_string(),
            category: TicketCategory::Technical,
            priority: TicketPriority::High,
            status: TicketStatus::Open,
            submitted_by: "John Doe".to_string(),
            email: "john.doe@school.com".to_string(),
            created_at: datetime!(2025 - 10 - 30 09:00),
            last_update: datetime!(2025 - 10 - 30 09:30),
            messages: 3,
        },
        SupportTicket {
            id: TicketId::new("TKT-1002"),
            subject: "Payment verification issue".to_string(),
            category: TicketCategory::Billing,
            priority: TicketPriority::Medium,
            status: TicketStatus::InProgress,
            submitted_by: "Sarah Johnson".to_string(),
            email: "sarah.j@vendor.com".to_string(),
            created_at: datetime!(2025 - 10 - 29 14:15),
            last_update: datetime!(2025 - 10 - 30 08:00),
            messages: 5,
        },
        SupportTicket {
            id: TicketId::new("TKT-1003"),
            subject: "Request for feature: Bulk upload".to_string(),
            category: TicketCategory::FeatureRequest,
            priority: TicketPriority::Low,
            status: TicketStatus::Open,
            submitted_by: "Michael Chen".to_string(),
            email: "michael.c@school.com".to_string(),
            created_at: datetime!(2025 - 10 - 28 11:30),
            last_update: datetime!(2025 - 10 - 29 15:45),
            messages: 2,
        },
        SupportTicket {
            id: TicketId::new("TKT-1004"),
            subject: "Data export not working".to_string(),
            category: TicketCategory::Technical,
            priority: TicketPriority::High,
            status: TicketStatus::InProgress,
            submitted_by: "Emily Brown".to_string(),
            email: "emily.b@school.com".to_string(),
            created_at: datetime!(2025 - 10 - 30 10:20),
            last_update: datetime!(2025 - 10 - 30 10:45),
            messages: 4,
        },
        SupportTicket {
            id: TicketId::new("TKT-1005"),
            subject: "Account access issue".to_string(),
            category: TicketCategory::Access,
            priority: TicketPriority::Medium,
            status: TicketStatus::Resolved,
            submitted_by: "David Wilson".to_string(),
            email: "david.w@vendor.com".to_string(),
            created_at: datetime!(2025 - 10 - 27 13:00),
            last_update: datetime!(2025 - 10 - 28 09:00),
            messages: 6,
        },
    ]
}
