//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! State lives in the `WorkspaceStore`; handlers turn reducer effects into
//! port calls and feed the results back.

pub mod handlers;
mod workspace_store;

pub use handlers::{
    ExportNotesCommand, ExportNotesError, ExportNotesHandler, GenerateNotesCommand,
    GenerateNotesError, GenerateNotesHandler, GenerateNotesResult,
};
pub use workspace_store::WorkspaceStore;
