//! Foundation module - Shared domain primitives.
//!
//! Contains the error types and lifecycle trait that the `notes` and
//! `workspace` modules build on.

mod errors;
mod state_machine;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
