//! HTTP handlers for note endpoints.
//!
//! Page routes follow post-redirect-get: every form post updates the
//! workspace and redirects back to `/`, where the outcome shows up as a
//! notification. JSON routes return the outcome directly.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::application::{
    ExportNotesCommand, ExportNotesError, ExportNotesHandler, GenerateNotesCommand,
    GenerateNotesError, GenerateNotesHandler, WorkspaceStore,
};
use crate::domain::notes::{is_suggestion, DetailLevel, RenderedRegion, PROMPT_SUGGESTIONS};
use crate::domain::workspace::{Notification, WorkspaceEvent, WorkspaceState};
use crate::ports::{
    AIProvider, DocumentExportService, ExportedDocument, ProviderInfo, RegionRenderer,
};

use super::dto::{
    ErrorResponse, ExportForm, ExportRequest, GenerateForm, HealthResponse, NotesRequest,
    NotesResponse, SuggestionForm, WorkspaceResponse,
};
use super::page::render_page;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Shared state for note routes.
#[derive(Clone)]
pub struct NotesAppState {
    store: Arc<WorkspaceStore>,
    generate_handler: Arc<GenerateNotesHandler>,
    export_handler: Arc<ExportNotesHandler>,
    renderer: Arc<dyn RegionRenderer>,
    exporter: Arc<dyn DocumentExportService>,
    provider_info: ProviderInfo,
    verbose_errors: bool,
}

impl NotesAppState {
    /// Wires a fresh workspace to the given provider, renderer and exporter.
    pub fn new(
        provider: Arc<dyn AIProvider>,
        renderer: Arc<dyn RegionRenderer>,
        exporter: Arc<dyn DocumentExportService>,
    ) -> Self {
        let store = Arc::new(WorkspaceStore::new());
        let provider_info = provider.provider_info();
        Self {
            generate_handler: Arc::new(GenerateNotesHandler::new(store.clone(), provider)),
            export_handler: Arc::new(ExportNotesHandler::new(
                store.clone(),
                renderer.clone(),
                exporter.clone(),
            )),
            store,
            renderer,
            exporter,
            provider_info,
            verbose_errors: false,
        }
    }

    /// Include underlying error text in JSON error responses.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn store(&self) -> &Arc<WorkspaceStore> {
        &self.store
    }

    fn render(&self, state: &WorkspaceState) -> Option<RenderedRegion> {
        state
            .notes()
            .filter(|notes| !notes.is_empty())
            .map(|notes| self.renderer.render(notes.markdown()))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Page handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Workspace page
pub async fn show_page(State(state): State<NotesAppState>) -> Html<String> {
    let snapshot = state.store.snapshot().await;
    let region = state.render(&snapshot);
    Html(render_page(&snapshot, region.as_ref(), &state.provider_info))
}

/// POST /generate - Generate notes from the composer form
pub async fn generate_form(
    State(state): State<NotesAppState>,
    Form(form): Form<GenerateForm>,
) -> Redirect {
    let cmd = GenerateNotesCommand {
        detail: Some(form.detail()),
        note_type: form.note_type,
        prompt: Some(form.prompt),
    };
    if let Err(err) = state.generate_handler.handle(cmd).await {
        tracing::debug!(error = %err, "Generation did not update the page");
    }
    Redirect::to("/")
}

/// POST /suggestion - Replace the prompt with a suggestion
pub async fn pick_suggestion(
    State(state): State<NotesAppState>,
    Form(form): Form<SuggestionForm>,
) -> Response {
    if !is_suggestion(&form.prompt) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation("Unknown prompt suggestion")),
        )
            .into_response();
    }
    state
        .store
        .dispatch(WorkspaceEvent::PromptChanged(form.prompt))
        .await;
    Redirect::to("/").into_response()
}

/// POST /export - Download the notes as PDF, or return to the page with a notification
pub async fn export_form(
    State(state): State<NotesAppState>,
    Form(form): Form<ExportForm>,
) -> Response {
    let cmd = ExportNotesCommand { title: form.title };
    match state.export_handler.handle(cmd).await {
        Ok(document) => attachment(document),
        Err(err) => {
            tracing::debug!(error = %err, "Export did not produce a document");
            Redirect::to("/").into_response()
        }
    }
}

/// POST /notifications/dismiss - Dismiss the current notification
pub async fn dismiss_notification(State(state): State<NotesAppState>) -> Redirect {
    state
        .store
        .dispatch(WorkspaceEvent::NotificationDismissed)
        .await;
    Redirect::to("/")
}

/// POST /clear - Drop the current notes
pub async fn clear_notes(State(state): State<NotesAppState>) -> Redirect {
    state.store.dispatch(WorkspaceEvent::NotesCleared).await;
    Redirect::to("/")
}

// ════════════════════════════════════════════════════════════════════════════
// JSON handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/workspace - Current workspace snapshot
pub async fn get_workspace(State(state): State<NotesAppState>) -> Json<WorkspaceResponse> {
    let snapshot = state.store.snapshot().await;
    let html = state
        .render(&snapshot)
        .map(|region| region.html().to_string())
        .unwrap_or_default();
    Json(WorkspaceResponse {
        can_submit: snapshot.can_submit(),
        shows_export_control: snapshot.shows_export_control(),
        state: snapshot,
        html,
        provider: state.provider_info.clone(),
    })
}

/// POST /api/notes - Generate notes
pub async fn create_notes(
    State(state): State<NotesAppState>,
    Json(req): Json<NotesRequest>,
) -> Response {
    let cmd = GenerateNotesCommand {
        prompt: Some(req.prompt),
        note_type: req.note_type,
        detail: req.detailed.map(DetailLevel::from_detailed),
    };

    match state.generate_handler.handle(cmd).await {
        Ok(result) => {
            let html = state.renderer.render(result.notes.markdown());
            let response =
                NotesResponse::new(result.token.value(), &result.notes, html.html().to_string());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_generate_error(e, state.verbose_errors),
    }
}

/// POST /api/notes/export - Export the current notes as PDF
pub async fn export_notes(
    State(state): State<NotesAppState>,
    body: Option<Json<ExportRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let cmd = ExportNotesCommand { title: req.title };

    match state.export_handler.handle(cmd).await {
        Ok(document) => attachment(document),
        Err(e) => handle_export_error(e, state.verbose_errors),
    }
}

/// GET /api/suggestions - Sample prompts
pub async fn list_suggestions() -> Json<Vec<&'static str>> {
    Json(PROMPT_SUGGESTIONS.to_vec())
}

/// GET /health - Liveness check plus PDF rasterizer availability
pub async fn health(State(state): State<NotesAppState>) -> Json<HealthResponse> {
    let pdf_export = state.exporter.is_available().await;
    if !pdf_export {
        tracing::warn!("PDF rasterizer is not available");
    }
    Json(HealthResponse {
        status: "ok",
        pdf_export,
        provider: state.provider_info.clone(),
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// `filename` carries an ASCII fallback; `filename*` the exact UTF-8 name.
fn content_disposition(filename: &str) -> String {
    let fallback: String = filename
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' && c != '\\' { c } else { '_' })
        .collect();
    if fallback == filename {
        return format!("attachment; filename=\"{}\"", filename);
    }
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback,
        urlencoding::encode(filename)
    )
}

fn attachment(document: ExportedDocument) -> Response {
    let disposition = content_disposition(&document.filename);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response()
}

fn external_error(
    code: &str,
    notification: Notification,
    cause: &dyn std::fmt::Display,
    verbose: bool,
) -> Response {
    let mut body = ErrorResponse::new(code, notification.description);
    if verbose {
        body = body.with_details(serde_json::json!({ "error": cause.to_string() }));
    }
    (StatusCode::BAD_GATEWAY, Json(body)).into_response()
}

fn handle_generate_error(error: GenerateNotesError, verbose: bool) -> Response {
    match error {
        GenerateNotesError::Validation(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(e.to_string())),
        )
            .into_response(),
        GenerateNotesError::Provider(e) => external_error(
            "GENERATION_FAILED",
            Notification::generation_failed(),
            &e,
            verbose,
        ),
        GenerateNotesError::Superseded { token } => (
            StatusCode::CONFLICT,
            Json(ErrorResponse::new(
                "SUPERSEDED",
                format!("Request {} was replaced by a newer submission", token),
            )),
        )
            .into_response(),
    }
}

fn handle_export_error(error: ExportNotesError, verbose: bool) -> Response {
    match error {
        ExportNotesError::Validation(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::validation(e.to_string())),
        )
            .into_response(),
        ExportNotesError::Export(e) => {
            external_error("EXPORT_FAILED", Notification::export_failed(), &e, verbose)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::workspace::RequestToken;
    use crate::ports::{AIError, ExportError};

    #[test]
    fn validation_error_maps_to_422() {
        let response = handle_generate_error(
            GenerateNotesError::Validation(ValidationError::empty_field("prompt")),
            false,
        );
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn provider_error_maps_to_502() {
        let response = handle_generate_error(
            GenerateNotesError::Provider(AIError::unavailable("down")),
            false,
        );
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn superseded_maps_to_409() {
        let response = handle_generate_error(
            GenerateNotesError::Superseded {
                token: RequestToken::after(0),
            },
            false,
        );
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn export_errors_map_by_kind() {
        let response = handle_export_error(
            ExportNotesError::Validation(ValidationError::empty_export_target("no notes")),
            false,
        );
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = handle_export_error(
            ExportNotesError::Export(ExportError::pdf_failed("exit 1")),
            true,
        );
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn attachment_sets_download_headers() {
        let document = ExportedDocument::pdf(b"%PDF-1.4".to_vec(), "Graph-theory-notes.pdf");
        let response = attachment(document);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Graph-theory-notes.pdf\""
        );
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    }

    #[test]
    fn non_ascii_filename_gets_encoded_parameter() {
        let disposition = content_disposition("Théorie-des-graphes-notes.pdf");
        assert!(disposition.is_ascii());
        assert_eq!(
            disposition,
            "attachment; filename=\"Th_orie-des-graphes-notes.pdf\"; \
             filename*=UTF-8''Th%C3%A9orie-des-graphes-notes.pdf"
        );

        let response = attachment(ExportedDocument::pdf(
            b"%PDF-1.4".to_vec(),
            "Théorie-notes.pdf",
        ));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn ascii_filename_has_single_parameter() {
        assert_eq!(
            content_disposition("SQL-joins-notes.pdf"),
            "attachment; filename=\"SQL-joins-notes.pdf\""
        );
    }
}
