//! Workspace events and the side effects the reducer asks for.

use super::{RequestToken, WorkspaceState};
use crate::domain::foundation::ValidationError;
use crate::domain::notes::{DetailLevel, ExportOptions, GeneratedNotes, GenerationRequest, NoteType};

/// Everything that can change the workspace.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceEvent {
    /// Prompt text edited or a suggestion picked.
    PromptChanged(String),
    NoteTypeSelected(NoteType),
    DetailSelected(DetailLevel),
    /// User pressed "Generate Notes".
    ///
    /// Selections carried here are applied in the same step that composes
    /// the request; `None` keeps the current value.
    GenerateRequested {
        prompt: Option<String>,
        note_type: Option<NoteType>,
        detail: Option<DetailLevel>,
    },
    GenerationSucceeded {
        token: RequestToken,
        notes: GeneratedNotes,
    },
    GenerationFailed {
        token: RequestToken,
        reason: String,
    },
    /// User pressed "Export PDF". `title` overrides the prompt as heading.
    ExportRequested { title: Option<String> },
    ExportSucceeded { filename: String },
    ExportFailed { reason: String },
    NotificationDismissed,
    NotesCleared,
}

impl WorkspaceEvent {
    /// Submit with the selections already in the workspace.
    pub fn generate() -> Self {
        Self::GenerateRequested {
            prompt: None,
            note_type: None,
            detail: None,
        }
    }
}

/// External work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Issue exactly one outbound generation call.
    Generate {
        token: RequestToken,
        request: GenerationRequest,
    },
    /// Export the given notes as PDF.
    Export {
        notes: GeneratedNotes,
        options: ExportOptions,
    },
}

/// How the reducer treated an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The event changed (or legitimately left) the state.
    Applied,
    /// The event was refused because of invalid input or state.
    Rejected(ValidationError),
    /// A response for a superseded request; ignored.
    Stale,
}

/// Result of reducing one event.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: WorkspaceState,
    pub effect: Option<Effect>,
    pub outcome: Outcome,
}

impl Transition {
    pub(super) fn applied(state: WorkspaceState) -> Self {
        Self {
            state,
            effect: None,
            outcome: Outcome::Applied,
        }
    }

    pub(super) fn with_effect(state: WorkspaceState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
            outcome: Outcome::Applied,
        }
    }

    pub(super) fn rejected(state: WorkspaceState, error: ValidationError) -> Self {
        Self {
            state,
            effect: None,
            outcome: Outcome::Rejected(error),
        }
    }

    pub(super) fn stale(state: WorkspaceState) -> Self {
        Self {
            state,
            effect: None,
            outcome: Outcome::Stale,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self.outcome, Outcome::Stale)
    }
}
