//! GeneratedNotes - the markdown returned for a request.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::GenerationRequest;

/// Markdown notes held in the workspace until replaced or cleared.
///
/// The markdown is stored exactly as the generator returned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedNotes {
    request: GenerationRequest,
    markdown: String,
    model: String,
    generated_at: DateTime<Utc>,
}

impl GeneratedNotes {
    pub fn new(request: GenerationRequest, markdown: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            request,
            markdown: markdown.into(),
            model: model.into(),
            generated_at: Utc::now(),
        }
    }

    /// The request these notes answer.
    pub fn request(&self) -> &GenerationRequest {
        &self.request
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Returns true when there is nothing to display or export.
    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty()
    }
}
