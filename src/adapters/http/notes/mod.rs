//! HTTP adapter for the notes workspace: the server-rendered page and the JSON API.

mod dto;
mod handlers;
mod page;
mod routes;

pub use dto::{
    ErrorResponse, ExportRequest, HealthResponse, NotesRequest, NotesResponse, WorkspaceResponse,
};
pub use handlers::NotesAppState;
pub use page::render_page;
pub use routes::notes_routes;
