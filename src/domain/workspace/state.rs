//! WorkspaceState - the immutable snapshot of everything the page shows.

use serde::Serialize;

use super::Notification;
use crate::domain::foundation::StateMachine;
use crate::domain::notes::{DetailLevel, GeneratedNotes, NoteType};

/// Identifies one accepted generation submission.
///
/// Tokens increase monotonically; only the response carrying the current
/// in-flight token may update the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub(crate) fn after(last: u64) -> Self {
        Self(last + 1)
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Generation phase: idle → generating → rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Generating,
    Rendered,
}

impl StateMachine for GenerationStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use GenerationStatus::*;
        matches!(
            (self, target),
            (Idle, Generating)
                | (Rendered, Generating)
                // resubmission supersedes the running request
                | (Generating, Generating)
                | (Generating, Rendered)
                | (Generating, Idle)
                | (Rendered, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use GenerationStatus::*;
        match self {
            Idle => vec![Generating],
            Generating => vec![Generating, Rendered, Idle],
            Rendered => vec![Generating, Idle],
        }
    }
}

/// Export phase: ready → exporting → done | failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportStatus {
    #[default]
    Ready,
    Exporting,
    Done,
    Failed,
}

impl StateMachine for ExportStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ExportStatus::*;
        matches!(
            (self, target),
            (Ready, Exporting)
                | (Exporting, Done)
                | (Exporting, Failed)
                | (Done, Exporting)
                | (Failed, Exporting)
                | (Done, Ready)
                | (Failed, Ready)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ExportStatus::*;
        match self {
            Ready => vec![Exporting],
            Exporting => vec![Done, Failed],
            Done | Failed => vec![Exporting, Ready],
        }
    }
}

/// Snapshot of the UI state.
///
/// Never mutated in place by callers; [`super::reduce`] produces the next
/// snapshot from the current one and an event.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkspaceState {
    pub(super) prompt: String,
    pub(super) note_type: NoteType,
    pub(super) detail: DetailLevel,
    pub(super) notes: Option<GeneratedNotes>,
    pub(super) generation: GenerationStatus,
    pub(super) in_flight: Option<RequestToken>,
    pub(super) export: ExportStatus,
    pub(super) notification: Option<Notification>,
    #[serde(skip)]
    pub(super) last_token: u64,
}

impl WorkspaceState {
    /// Initial state: empty prompt, theory notes, concise.
    pub fn new() -> Self {
        Self::default()
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

    pub fn notes(&self) -> Option<&GeneratedNotes> {
        self.notes.as_ref()
    }

    /// Generated markdown, or the empty string when there is none.
    pub fn content(&self) -> &str {
        self.notes.as_ref().map(|n| n.markdown()).unwrap_or("")
    }

    pub fn generation(&self) -> GenerationStatus {
        self.generation
    }

    pub fn in_flight(&self) -> Option<RequestToken> {
        self.in_flight
    }

    pub fn export(&self) -> ExportStatus {
        self.export
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The export control exists only while there is content to export.
    pub fn shows_export_control(&self) -> bool {
        !self.content().is_empty()
    }

    /// The generate control is enabled only for a non-blank prompt while
    /// nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_generating() && !self.prompt.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_idle_and_empty() {
        let state = WorkspaceState::new();
        assert_eq!(state.prompt(), "");
        assert_eq!(state.note_type(), NoteType::Theory);
        assert_eq!(state.detail(), DetailLevel::Concise);
        assert_eq!(state.content(), "");
        assert_eq!(state.generation(), GenerationStatus::Idle);
        assert_eq!(state.export(), ExportStatus::Ready);
        assert!(state.notification().is_none());
        assert!(!state.is_generating());
        assert!(!state.shows_export_control());
        assert!(!state.can_submit());
    }

    #[test]
    fn tokens_increase() {
        let first = RequestToken::after(0);
        let second = RequestToken::after(first.value());
        assert!(second > first);
        assert_eq!(second.to_string(), "#2");
    }

    #[test]
    fn generation_status_transitions() {
        assert!(GenerationStatus::Idle.can_transition_to(&GenerationStatus::Generating));
        assert!(!GenerationStatus::Idle.can_transition_to(&GenerationStatus::Rendered));
        assert!(GenerationStatus::Generating.can_transition_to(&GenerationStatus::Generating));
        for status in [
            GenerationStatus::Idle,
            GenerationStatus::Generating,
            GenerationStatus::Rendered,
        ] {
            for target in status.valid_transitions() {
                assert!(status.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn export_status_rejects_double_export() {
        assert!(ExportStatus::Exporting
            .transition_to(ExportStatus::Exporting)
            .is_err());
        assert_eq!(
            ExportStatus::Failed.transition_to(ExportStatus::Exporting),
            Ok(ExportStatus::Exporting)
        );
    }

    #[test]
    fn state_serializes_without_internal_counter() {
        let json = serde_json::to_value(WorkspaceState::new()).unwrap();
        assert_eq!(json["note_type"], "theory");
        assert_eq!(json["generation"], "idle");
        assert!(json.get("last_token").is_none());
    }
}
