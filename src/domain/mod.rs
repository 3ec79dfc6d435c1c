//! Domain layer containing the note-taking vocabulary and UI state model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, state machine trait)
//! - `notes` - Note types, generation requests, policy, templates, export naming
//! - `workspace` - Immutable UI state snapshot, events and the reducer

pub mod foundation;
pub mod notes;
pub mod workspace;
