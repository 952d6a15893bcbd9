// crates/educonnect-core/src/core/records.rs
// ============================================================================
// Module: EduConnect Directory Records
// Description: Domain rows for schools, vendors, users, and support tickets.
// Purpose: Model the management-view tables as immutable, typed records.
// Dependencies: crate::core::{filter, identifiers}, serde, time
// ============================================================================

//! ## Overview
//! Directory records are immutable for the session: hosts supply fixed
//! ordered sequences and no administrative action mutates them. Status-like
//! fields are closed enums with stable `as_str` labels used for categorical
//! matching and rendering; free-form fields (names, emails, subjects) feed
//! the text search.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::Date;
use time::PrimitiveDateTime;

use crate::core::filter::FilterField;
use crate::core::filter::TableRecord;
use crate::core::identifiers::SchoolId;
use crate::core::identifiers::TicketId;
use crate::core::identifiers::UserId;
use crate::core::identifiers::VendorId;

// ============================================================================
// SECTION: School Records
// ============================================================================

/// School classification by level of education offered.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolKind {
    /// Primary school.
    Primary,
    /// Secondary school.
    Secondary,
    /// Higher secondary school.
    HigherSecondary,
    /// International school.
    International,
}

impl SchoolKind {
    /// Returns the stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::HigherSecondary => "higher secondary",
            Self::International => "international",
        }
    }
}

/// School lifecycle status in the registration workflow.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchoolStatus {
    /// School is verified and operating on the platform.
    Active,
    /// Registration is awaiting administrator review.
    Pending,
    /// School has been suspended by an administrator.
    Suspended,
}

impl SchoolStatus {
    /// Returns the stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
        }
    }
}

/// One row of the school management table.
///
/// # Invariants
/// - Immutable for the session; administrative actions never mutate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// School identifier.
    pub id: SchoolId,
    /// Display name.
    pub name: String,
    /// School classification.
    pub kind: SchoolKind,
    /// Geographic region label.
    pub region: String,
    /// Registration status.
    pub status: SchoolStatus,
    /// Indicates the registration has been verified.
    pub verified: bool,
    /// Count of active admissions.
    pub admissions: u32,
    /// Contact email address.
    pub contact: String,
}

impl TableRecord for School {
    type Id = SchoolId;

    fn record_id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn categorical_value(&self, field: &FilterField) -> Option<&str> {
        match field.as_str() {
            "status" => Some(self.status.as_str()),
            "kind" => Some(self.kind.as_str()),
            "region" => Some(&self.region),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Vendor Records
// ============================================================================

/// Marketplace vendor category.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorCategory {
    /// Books and stationery suppliers.
    BooksStationery,
    /// Educational technology providers.
    Technology,
    /// Canteen and catering services.
    FoodServices,
    /// Student transportation services.
    Transportation,
    /// Uniform manufacturers.
    Uniforms,
}

impl VendorCategory {
    /// Returns the stable label for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BooksStationery => "books & stationery",
            Self::Technology => "technology",
            Self::FoodServices => "food services",
            Self::Transportation => "transportation",
            Self::Uniforms => "uniforms",
        }
    }
}

/// Vendor lifecycle status in the onboarding workflow.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    /// Vendor is approved and selling on the platform.
    Active,
    /// Onboarding is awaiting administrator review.
    Pending,
    /// Vendor is inactive.
    Inactive,
}

impl VendorStatus {
    /// Returns the stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Inactive => "inactive",
        }
    }
}

/// One row of the vendor management table.
///
/// # Invariants
/// - Immutable for the session; administrative actions never mutate records.
/// - `rating` is a five-point average and is not used for equality-sensitive
///   logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor identifier.
    pub id: VendorId,
    /// Display name.
    pub name: String,
    /// Marketplace category.
    pub category: VendorCategory,
    /// Contact person name.
    pub contact: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Average customer rating out of five.
    pub rating: f64,
    /// Total completed orders.
    pub orders: u32,
    /// Count of listed products.
    pub products: u32,
    /// Onboarding status.
    pub status: VendorStatus,
    /// Indicates the vendor has been verified.
    pub verified: bool,
    /// Date the vendor joined the platform.
    pub joined: Date,
}

impl TableRecord for Vendor {
    type Id = VendorId;

    fn record_id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, self.category.as_str()]
    }

    fn categorical_value(&self, field: &FilterField) -> Option<&str> {
        match field.as_str() {
            "status" => Some(self.status.as_str()),
            "category" => Some(self.category.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Platform User Records
// ============================================================================

/// Platform user role.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Student account.
    Student,
    /// Parent account.
    Parent,
    /// Teacher account.
    Teacher,
}

impl UserRole {
    /// Returns the stable label for the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Parent => "parent",
            Self::Teacher => "teacher",
        }
    }
}

/// Platform user account status.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Account is active.
    Active,
    /// Account is inactive.
    Inactive,
}

impl UserStatus {
    /// Returns the stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// One row of the user management table.
///
/// # Invariants
/// - Immutable for the session; administrative actions never mutate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformUser {
    /// User identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account role.
    pub role: UserRole,
    /// Account status.
    pub status: UserStatus,
    /// Date the account joined the platform.
    pub joined: Date,
    /// Lifetime login count.
    pub login_count: u32,
    /// Indicates the account has been flagged for review.
    pub flagged: bool,
}

impl TableRecord for PlatformUser {
    type Id = UserId;

    fn record_id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn categorical_value(&self, field: &FilterField) -> Option<&str> {
        match field.as_str() {
            "status" => Some(self.status.as_str()),
            "role" => Some(self.role.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Support Ticket Records
// ============================================================================

/// Support ticket category.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    /// Technical problem report.
    Technical,
    /// Billing or payment issue.
    Billing,
    /// Feature request.
    FeatureRequest,
    /// Account access issue.
    Access,
}

impl TicketCategory {
    /// Returns the stable label for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::FeatureRequest => "feature request",
            Self::Access => "access",
        }
    }
}

/// Support ticket priority.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl TicketPriority {
    /// Returns the stable label for the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Support ticket workflow status.
///
/// # Invariants
/// - Variants are stable for serialization and categorical matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Ticket is open and unassigned.
    Open,
    /// Ticket is being worked on.
    InProgress,
    /// Ticket has been resolved.
    Resolved,
}

impl TicketStatus {
    /// Returns the stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in progress",
            Self::Resolved => "resolved",
        }
    }
}

/// One row of the support ticket table.
///
/// # Invariants
/// - Immutable for the session; administrative actions never mutate records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    /// Ticket identifier.
    pub id: TicketId,
    /// Ticket subject line.
    pub subject: String,
    /// Ticket category.
    pub category: TicketCategory,
    /// Ticket priority.
    pub priority: TicketPriority,
    /// Workflow status.
    pub status: TicketStatus,
    /// Name of the submitting user.
    pub submitted_by: String,
    /// Email of the submitting user.
    pub email: String,
    /// Submission timestamp.
    pub created_at: PrimitiveDateTime,
    /// Timestamp of the latest update.
    pub last_update: PrimitiveDateTime,
    /// Count of messages in the ticket thread.
    pub messages: u32,
}

impl TableRecord for SupportTicket {
    type Id = TicketId;

    fn record_id(&self) -> &Self::Id {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.subject
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.subject, self.id.as_str()]
    }

    fn categorical_value(&self, field: &FilterField) -> Option<&str> {
        match field.as_str() {
            "status" => Some(self.status.as_str()),
            "category" => Some(self.category.as_str()),
            "priority" => Some(self.priority.as_str()),
            _ => None,
        }
    }
}
