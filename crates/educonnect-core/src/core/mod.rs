// crates/educonnect-core/src/core/mod.rs
// ============================================================================
// Module: EduConnect Core Types
// Description: Identifiers, records, filter state, and summaries.
// Purpose: Group the data model shared by the runtime and interface layers.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! Core data types for the EduConnect admin core. Everything here is plain
//! data: construction, labels, and validation, with no I/O and no clock.

pub mod filter;
pub mod identifiers;
pub mod records;
pub mod summary;
