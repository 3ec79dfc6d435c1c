//! GenerateNotesHandler - Command handler for producing notes.
//!
//! Submits the composer selections as one event, performs exactly one
//! provider call outside the store lock and feeds the result back as an
//! event.

use std::sync::Arc;

use thiserror::Error;

use crate::application::WorkspaceStore;
use crate::domain::foundation::ValidationError;
use crate::domain::notes::{DetailLevel, GeneratedNotes, NoteType};
use crate::domain::workspace::{
    Effect, Outcome, RequestToken, WorkspaceEvent, WorkspaceState,
};
use crate::ports::{AIError, AIProvider, CompletionRequest};

/// Command to generate notes.
///
/// Fields left as `None` keep the current workspace value.
#[derive(Debug, Clone, Default)]
pub struct GenerateNotesCommand {
    pub prompt: Option<String>,
    pub note_type: Option<NoteType>,
    pub detail: Option<DetailLevel>,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateNotesResult {
    pub token: RequestToken,
    pub notes: GeneratedNotes,
    pub state: WorkspaceState,
}

/// Errors from note generation.
#[derive(Debug, Error)]
pub enum GenerateNotesError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("generation failed: {0}")]
    Provider(#[from] AIError),

    /// A newer submission replaced this one while it was in flight.
    #[error("request {token} was superseded by a newer submission")]
    Superseded { token: RequestToken },
}

/// Handler for generating notes.
pub struct GenerateNotesHandler {
    store: Arc<WorkspaceStore>,
    provider: Arc<dyn AIProvider>,
}

impl GenerateNotesHandler {
    pub fn new(store: Arc<WorkspaceStore>, provider: Arc<dyn AIProvider>) -> Self {
        Self { store, provider }
    }

    pub async fn handle(
        &self,
        cmd: GenerateNotesCommand,
    ) -> Result<GenerateNotesResult, GenerateNotesError> {
        // 1. Submit selections and take a token under one lock
        let transition = self
            .store
            .dispatch(WorkspaceEvent::GenerateRequested {
                prompt: cmd.prompt,
                note_type: cmd.note_type,
                detail: cmd.detail,
            })
            .await;
        let (token, request) = match (transition.outcome, transition.effect) {
            (Outcome::Rejected(err), _) => return Err(err.into()),
            (_, Some(Effect::Generate { token, request })) => (token, request),
            _ => {
                return Err(ValidationError::invalid_format(
                    "prompt",
                    "submission produced no generation request",
                )
                .into())
            }
        };

        tracing::info!(
            token = %token,
            note_type = %request.note_type(),
            detail = %request.detail(),
            "Generating notes"
        );

        // 2. Single outbound call, no lock held
        let result = self
            .provider
            .complete(CompletionRequest::for_notes(&request))
            .await;

        // 3. Feed the outcome back
        match result {
            Ok(response) => {
                let notes = GeneratedNotes::new(request, response.content, response.model);
                let transition = self
                    .store
                    .dispatch(WorkspaceEvent::GenerationSucceeded {
                        token,
                        notes: notes.clone(),
                    })
                    .await;
                if transition.is_stale() {
                    tracing::debug!(token = %token, "Discarding superseded generation result");
                    return Err(GenerateNotesError::Superseded { token });
                }

                tracing::info!(
                    token = %token,
                    chars = notes.markdown().len(),
                    total_tokens = response.usage.total_tokens,
                    "Notes generated"
                );
                Ok(GenerateNotesResult {
                    token,
                    notes,
                    state: transition.state,
                })
            }
            Err(err) => {
                let transition = self
                    .store
                    .dispatch(WorkspaceEvent::GenerationFailed {
                        token,
                        reason: err.to_string(),
                    })
                    .await;
                if transition.is_stale() {
                    tracing::debug!(token = %token, error = %err, "Ignoring failure of superseded request");
                    return Err(GenerateNotesError::Superseded { token });
                }

                tracing::warn!(token = %token, error = %err, "Note generation failed");
                Err(err.into())
            }
        }
    }
}
