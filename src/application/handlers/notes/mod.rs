//! Notes command handlers.

mod export_notes;
mod generate_notes;

pub use export_notes::{ExportNotesCommand, ExportNotesError, ExportNotesHandler};
pub use generate_notes::{
    GenerateNotesCommand, GenerateNotesError, GenerateNotesHandler, GenerateNotesResult,
};
