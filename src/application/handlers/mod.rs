//! Application handlers.
//!
//! Command handlers that orchestrate the reducer, the provider and the
//! exporter for each user action.

pub mod notes;

pub use notes::{
    ExportNotesCommand, ExportNotesError, ExportNotesHandler, GenerateNotesCommand,
    GenerateNotesError, GenerateNotesHandler, GenerateNotesResult,
};
