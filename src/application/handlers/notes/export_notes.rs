//! ExportNotesHandler - Command handler for PDF export of the current notes.

use std::sync::Arc;

use thiserror::Error;

use crate::application::WorkspaceStore;
use crate::domain::foundation::ValidationError;
use crate::domain::workspace::{Effect, Outcome, WorkspaceEvent};
use crate::ports::{DocumentExportService, ExportError, ExportedDocument, RegionRenderer};

/// Command to export the notes currently in the workspace.
#[derive(Debug, Clone, Default)]
pub struct ExportNotesCommand {
    /// Heading for the PDF; defaults to the prompt that produced the notes.
    pub title: Option<String>,
}

/// Errors from exporting notes.
#[derive(Debug, Error)]
pub enum ExportNotesError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Handler for exporting notes.
pub struct ExportNotesHandler {
    store: Arc<WorkspaceStore>,
    renderer: Arc<dyn RegionRenderer>,
    exporter: Arc<dyn DocumentExportService>,
}

impl ExportNotesHandler {
    pub fn new(
        store: Arc<WorkspaceStore>,
        renderer: Arc<dyn RegionRenderer>,
        exporter: Arc<dyn DocumentExportService>,
    ) -> Self {
        Self {
            store,
            renderer,
            exporter,
        }
    }

    pub async fn handle(&self, cmd: ExportNotesCommand) -> Result<ExportedDocument, ExportNotesError> {
        let transition = self
            .store
            .dispatch(WorkspaceEvent::ExportRequested { title: cmd.title })
            .await;
        let (notes, options) = match (transition.outcome, transition.effect) {
            (Outcome::Rejected(err), _) => return Err(err.into()),
            (_, Some(Effect::Export { notes, options })) => (notes, options),
            _ => return Err(ValidationError::empty_export_target("no export was started").into()),
        };

        let region = self.renderer.render(notes.markdown());
        tracing::info!(filename = %options.filename, "Exporting notes to PDF");

        match self.exporter.export_pdf(&region, &options).await {
            Ok(document) => {
                self.store
                    .dispatch(WorkspaceEvent::ExportSucceeded {
                        filename: document.filename.clone(),
                    })
                    .await;
                tracing::info!(
                    filename = %document.filename,
                    bytes = document.content.len(),
                    "Notes exported"
                );
                Ok(document)
            }
            Err(err) => {
                self.store
                    .dispatch(WorkspaceEvent::ExportFailed {
                        reason: err.to_string(),
                    })
                    .await;
                tracing::warn!(error = %err, "PDF export failed");
                Err(err.into())
            }
        }
    }
}
