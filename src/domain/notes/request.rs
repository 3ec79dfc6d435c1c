//! GenerationRequest - the immutable unit of work sent to the generator.

use serde::Serialize;

use super::{DetailLevel, NoteType};
use crate::domain::foundation::ValidationError;

/// A validated note generation request.
///
/// Built fresh for every submission via [`GenerationRequest::compose`]; the
/// fields are private so a request can never hold a blank prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    prompt: String,
    note_type: NoteType,
    detail: DetailLevel,
}

impl GenerationRequest {
    /// Validates the composer input and produces a request.
    ///
    /// The stored prompt is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` when the prompt is empty or
    /// whitespace-only.
    pub fn compose(
        prompt: &str,
        note_type: NoteType,
        detail: DetailLevel,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }

        Ok(Self {
            prompt: prompt.to_string(),
            note_type,
            detail,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn note_type(&self) -> NoteType {
        self.note_type
    }

    pub fn detail(&self) -> DetailLevel {
        self.detail
    }
}
