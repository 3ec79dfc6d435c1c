//! HTTP DTOs for note endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::notes::{DetailLevel, GeneratedNotes, NoteType};
use crate::domain::workspace::WorkspaceState;
use crate::ports::ProviderInfo;

// ════════════════════════════════════════════════════════════════════════════
// Form DTOs (server-rendered page)
// ════════════════════════════════════════════════════════════════════════════

/// Body of the generate form.
///
/// `detailed` is a checkbox: present (any value) when ticked, absent otherwise.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub note_type: Option<NoteType>,
    #[serde(default)]
    pub detailed: Option<String>,
}

impl GenerateForm {
    pub fn detail(&self) -> DetailLevel {
        DetailLevel::from_detailed(self.detailed.is_some())
    }
}

/// A picked prompt suggestion.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionForm {
    pub prompt: String,
}

/// Body of the export form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportForm {
    #[serde(default)]
    pub title: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// JSON request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to generate notes.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesRequest {
    pub prompt: String,
    #[serde(default)]
    pub note_type: Option<NoteType>,
    #[serde(default)]
    pub detailed: Option<bool>,
}

/// Request to export the current notes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub title: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Freshly generated notes.
#[derive(Debug, Clone, Serialize)]
pub struct NotesResponse {
    pub token: u64,
    pub prompt: String,
    pub note_type: NoteType,
    pub detail: DetailLevel,
    pub markdown: String,
    pub html: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
}

impl NotesResponse {
    pub fn new(token: u64, notes: &GeneratedNotes, html: String) -> Self {
        Self {
            token,
            prompt: notes.request().prompt().to_string(),
            note_type: notes.request().note_type(),
            detail: notes.request().detail(),
            markdown: notes.markdown().to_string(),
            html,
            model: notes.model().to_string(),
            generated_at: notes.generated_at(),
        }
    }
}

/// Current workspace snapshot plus derived view flags.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceResponse {
    pub state: WorkspaceState,
    /// Rendered notes region; empty when there is no content.
    pub html: String,
    pub can_submit: bool,
    pub shows_export_control: bool,
    pub provider: ProviderInfo,
}

/// Service health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Whether the PDF rasterizer can be started.
    pub pdf_export: bool,
    pub provider: ProviderInfo,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_FAILED", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_form_checkbox_maps_to_detail() {
        let form: GenerateForm =
            serde_json::from_str(r#"{"prompt": "Graph theory", "detailed": "on"}"#).unwrap();
        assert_eq!(form.detail(), DetailLevel::Detailed);
        assert_eq!(form.note_type, None);

        let form: GenerateForm =
            serde_json::from_str(r#"{"prompt": "Graph theory", "note_type": "logic"}"#).unwrap();
        assert_eq!(form.detail(), DetailLevel::Concise);
        assert_eq!(form.note_type, Some(NoteType::Logic));
    }

    #[test]
    fn notes_request_defaults_selectors() {
        let req: NotesRequest = serde_json::from_str(r#"{"prompt": "SQL joins"}"#).unwrap();
        assert_eq!(req.prompt, "SQL joins");
        assert!(req.note_type.is_none());
        assert!(req.detailed.is_none());
    }

    #[test]
    fn error_response_serializes_without_details_when_none() {
        let json = serde_json::to_string(&ErrorResponse::validation("bad")).unwrap();
        assert!(json.contains("VALIDATION_FAILED"));
        assert!(!json.contains("details"));
    }

    #[test]
    fn error_response_serializes_with_details_when_present() {
        let response = ErrorResponse::new("GENERATION_FAILED", "failed")
            .with_details(serde_json::json!({"error": "503"}));
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("details"));
    }
}
