//! HTTP routes for note endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    clear_notes, create_notes, dismiss_notification, export_form, export_notes, generate_form,
    get_workspace, health, list_suggestions, pick_suggestion, show_page, NotesAppState,
};

/// Creates the notes router with the page and JSON endpoints.
pub fn notes_routes(state: NotesAppState) -> Router {
    Router::new()
        .route("/", get(show_page))
        .route("/generate", post(generate_form))
        .route("/suggestion", post(pick_suggestion))
        .route("/export", post(export_form))
        .route("/notifications/dismiss", post(dismiss_notification))
        .route("/clear", post(clear_notes))
        .route("/api/workspace", get(get_workspace))
        .route("/api/notes", post(create_notes))
        .route("/api/notes/export", post(export_notes))
        .route("/api/suggestions", get(list_suggestions))
        .route("/health", get(health))
        .with_state(state)
}
