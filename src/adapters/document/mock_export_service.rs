//! Mock export service for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::domain::notes::{ExportOptions, RenderedRegion};
use crate::ports::{DocumentExportService, ExportError, ExportedDocument};

/// Bytes returned by a successful mock export.
pub const MOCK_PDF_BYTES: &[u8] = b"%PDF-1.4\n% mock\n%%EOF\n";

/// Exporter that records what it was asked to export.
///
/// Succeeds with [`MOCK_PDF_BYTES`] unless configured to fail.
#[derive(Debug, Clone, Default)]
pub struct MockExportService {
    failure: Option<ExportError>,
    delay: Duration,
    calls: Arc<Mutex<Vec<(RenderedRegion, ExportOptions)>>>,
}

impl MockExportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every export fails with `error`.
    pub fn failing_with(mut self, error: ExportError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Regions and options passed to each export, oldest first.
    pub fn get_calls(&self) -> Vec<(RenderedRegion, ExportOptions)> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<(RenderedRegion, ExportOptions)>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DocumentExportService for MockExportService {
    async fn export_pdf(
        &self,
        region: &RenderedRegion,
        options: &ExportOptions,
    ) -> Result<ExportedDocument, ExportError> {
        self.lock_calls().push((region.clone(), options.clone()));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(ExportedDocument::pdf(
                MOCK_PDF_BYTES.to_vec(),
                options.filename.clone(),
            )),
        }
    }

    async fn is_available(&self) -> bool {
        self.failure.is_none()
    }
}
