//! Notes module - what the user asks for and what comes back.
//!
//! - `NoteType` / `DetailLevel` - the two selectors
//! - `GenerationRequest` - validated, immutable composer output
//! - `GenerationPolicy` - system instruction, token budget, temperature
//! - `GeneratedNotes` - markdown returned for a request
//! - `RenderedRegion` - HTML fragment produced from the markdown
//! - `ExportOptions` - title and derived download filename
//! - `templates` - offline/demo note skeletons

mod export_options;
mod generated;
mod note_type;
mod policy;
mod rendered;
mod request;
mod suggestions;
pub mod templates;

pub use export_options::{
    export_filename, ExportOptions, DEFAULT_EXPORT_FILENAME, FILENAME_PROMPT_CHARS,
    FILENAME_SUFFIX,
};
pub use generated::GeneratedNotes;
pub use note_type::{DetailLevel, NoteType};
pub use policy::{GenerationPolicy, CONCISE_MAX_TOKENS, DETAILED_MAX_TOKENS, NOTES_TEMPERATURE};
pub use rendered::RenderedRegion;
pub use request::GenerationRequest;
pub use suggestions::{is_suggestion, PROMPT_SUGGESTIONS};
