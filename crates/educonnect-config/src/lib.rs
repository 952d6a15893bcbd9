// crates/educonnect-config/src/lib.rs
// ============================================================================
// Module: EduConnect Config Library
// Description: Canonical platform configuration model and validation.
// Purpose: Single source of truth for educonnect.toml semantics.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! `educonnect-config` defines the canonical configuration model for the
//! EduConnect platform: general toggles, notification preferences, and the
//! email, payment, and storage integrations surfaced by the settings view.
//! Parsing is strict and fail-closed: oversized files, unknown syntax, and
//! inconsistent values are rejected rather than patched up.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
