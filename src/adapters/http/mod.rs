//! HTTP adapters - page and REST API implementations.

pub mod notes;

pub use notes::{notes_routes, NotesAppState};
