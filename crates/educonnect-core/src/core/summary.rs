// crates/educonnect-core/src/core/summary.rs
// ============================================================================
// Module: EduConnect Dashboard Summaries
// Description: Aggregated counts for dashboard and stat-card rendering.
// Purpose: Derive KPI figures from record sequences without mutating them.
// Dependencies: crate::core::records, serde
// ============================================================================

//! ## Overview
//! Summaries are pure aggregations over record slices: status breakdowns,
//! role distributions, and admission/order totals. They back the dashboard
//! KPI cards and the per-view stat headers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::records::PlatformUser;
use crate::core::records::School;
use crate::core::records::SchoolStatus;
use crate::core::records::SupportTicket;
use crate::core::records::TicketPriority;
use crate::core::records::TicketStatus;
use crate::core::records::UserRole;
use crate::core::records::UserStatus;
use crate::core::records::Vendor;
use crate::core::records::VendorStatus;

// ============================================================================
// SECTION: Summary Types
// ============================================================================

/// Aggregated school counts.
///
/// # Invariants
/// - Status counts sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolSummary {
    /// Total schools in the directory.
    pub total: u64,
    /// Schools with active status.
    pub active: u64,
    /// Schools awaiting review.
    pub pending: u64,
    /// Suspended schools.
    pub suspended: u64,
    /// Verified schools.
    pub verified: u64,
    /// Sum of active admissions across all schools.
    pub admissions: u64,
}

/// Aggregated vendor counts.
///
/// # Invariants
/// - Status counts sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorSummary {
    /// Total vendors in the directory.
    pub total: u64,
    /// Vendors with active status.
    pub active: u64,
    /// Vendors awaiting review.
    pub pending: u64,
    /// Inactive vendors.
    pub inactive: u64,
    /// Verified vendors.
    pub verified: u64,
    /// Sum of completed orders across all vendors.
    pub orders: u64,
}

/// Aggregated platform user counts.
///
/// # Invariants
/// - Role counts sum to `total`; status counts sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Total users in the directory.
    pub total: u64,
    /// Users with active status.
    pub active: u64,
    /// Users with inactive status.
    pub inactive: u64,
    /// Student accounts.
    pub students: u64,
    /// Parent accounts.
    pub parents: u64,
    /// Teacher accounts.
    pub teachers: u64,
    /// Accounts flagged for review.
    pub flagged: u64,
}

/// Aggregated support ticket counts.
///
/// # Invariants
/// - Status counts sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketSummary {
    /// Total tickets in the queue.
    pub total: u64,
    /// Open tickets.
    pub open: u64,
    /// Tickets in progress.
    pub in_progress: u64,
    /// Resolved tickets.
    pub resolved: u64,
    /// High-priority tickets.
    pub high_priority: u64,
}

/// Combined dashboard summary across all directory domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySummary {
    /// School aggregates.
    pub schools: SchoolSummary,
    /// Vendor aggregates.
    pub vendors: VendorSummary,
    /// Platform user aggregates.
    pub users: UserSummary,
    /// Support ticket aggregates.
    pub tickets: TicketSummary,
}

// ============================================================================
// SECTION: Aggregation
// ============================================================================

/// Aggregates school counts from a record slice.
#[must_use]
pub fn summarize_schools(schools: &[School]) -> SchoolSummary {
    let mut summary = SchoolSummary::default();
    for school in schools {
        summary.total += 1;
        match school.status {
            SchoolStatus::Active => summary.active += 1,
            SchoolStatus::Pending => summary.pending += 1,
            SchoolStatus::Suspended => summary.suspended += 1,
        }
        if school.verified {
            summary.verified += 1;
        }
        summary.admissions += u64::from(school.admissions);
    }
    summary
}

/// Aggregates vendor counts from a record slice.
#[must_use]
pub fn summarize_vendors(vendors: &[Vendor]) -> VendorSummary {
    let mut summary = VendorSummary::default();
    for vendor in vendors {
        summary.total += 1;
        match vendor.status {
            VendorStatus::Active => summary.active += 1,
            VendorStatus::Pending => summary.pending += 1,
            VendorStatus::Inactive => summary.inactive += 1,
        }
        if vendor.verified {
            summary.verified += 1;
        }
        summary.orders += u64::from(vendor.orders);
    }
    summary
}

/// Aggregates platform user counts from a record slice.
#[must_use]
pub fn summarize_users(users: &[PlatformUser]) -> UserSummary {
    let mut summary = UserSummary::default();
    for user in users {
        summary.total += 1;
        match user.status {
            UserStatus::Active => summary.active += 1,
            UserStatus::Inactive => summary.inactive += 1,
        }
        match user.role {
            UserRole::Student => summary.students += 1,
            UserRole::Parent => summary.parents += 1,
            UserRole::Teacher => summary.teachers += 1,
        }
        if user.flagged {
            summary.flagged += 1;
        }
    }
    summary
}

/// Aggregates support ticket counts from a record slice.
#[must_use]
pub fn summarize_tickets(tickets: &[SupportTicket]) -> TicketSummary {
    let mut summary = TicketSummary::default();
    for ticket in tickets {
        summary.total += 1;
        match ticket.status {
            TicketStatus::Open => summary.open += 1,
            TicketStatus::InProgress => summary.in_progress += 1,
            TicketStatus::Resolved => summary.resolved += 1,
        }
        if ticket.priority == TicketPriority::High {
            summary.high_priority += 1;
        }
    }
    summary
}

/// Aggregates the combined dashboard summary across all domains.
#[must_use]
pub fn summarize_directory(
    schools: &[School],
    vendors: &[Vendor],
    users: &[PlatformUser],
    tickets: &[SupportTicket],
) -> DirectorySummary {
    DirectorySummary {
        schools: summarize_schools(schools),
        vendors: summarize_vendors(vendors),
        users: summarize_users(users),
        tickets: summarize_tickets(tickets),
    }
}
