// crates/educonnect-core/src/runtime/mod.rs
// ============================================================================
// Module: EduConnect Runtime
// Description: Filter evaluation, pagination, commands, and the in-memory store.
// Purpose: Group the operational surfaces built on the core data model.
// Dependencies: crate submodules
// ============================================================================

//! ## Overview
//! Runtime modules implement the operations the management views rely on:
//! the pure filter/search projection, offset-cursor pagination, the command
//! desk for simulated administrative actions, and the seeded in-memory
//! directory that backs them.

pub mod commands;
pub mod evaluator;
pub mod memory;
pub mod pagination;
