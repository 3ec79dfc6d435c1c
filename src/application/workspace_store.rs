//! WorkspaceStore - the single place the current snapshot lives.
//!
//! Every change goes through [`reduce`]. The lock is held only while reducing,
//! never across provider or exporter calls.

use tokio::sync::RwLock;

use crate::domain::workspace::{reduce, Transition, WorkspaceEvent, WorkspaceState};

/// Holds the current workspace snapshot.
#[derive(Debug, Default)]
pub struct WorkspaceStore {
    state: RwLock<WorkspaceState>,
}

impl WorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current snapshot.
    pub async fn snapshot(&self) -> WorkspaceState {
        self.state.read().await.clone()
    }

    /// Reduces `event` against the current snapshot and stores the result.
    ///
    /// The returned transition carries the stored snapshot and any effect
    /// the caller must run.
    pub async fn dispatch(&self, event: WorkspaceEvent) -> Transition {
        let mut state = self.state.write().await;
        let transition = reduce(&state, event);
        *state = transition.state.clone();
        transition
    }
}
