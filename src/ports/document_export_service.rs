//! Document Export Service Port - PDF export interface.
//!
//! This port defines the contract for turning the rendered notes region into
//! a downloadable PDF. The application layer depends on this trait, while
//! adapters (like `PdfExportService`) drive the actual rasterizer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::notes::{ExportOptions, RenderedRegion};

/// Port for exporting the rendered region to PDF.
///
/// # Contract
///
/// Implementations must:
/// - Work on a copy of the region; the caller's region is left untouched
/// - Prepend the optional title as a centered heading
/// - Apply the fixed [`PdfLayout`]
/// - Return a complete PDF or an error; never a partial document
///
/// # Usage
///
/// ```rust,ignore
/// let exporter: &dyn DocumentExportService = get_service();
/// let doc = exporter.export_pdf(&region, &ExportOptions::for_prompt("SQL joins")).await?;
/// assert_eq!(doc.filename, "SQL-joins-notes.pdf");
/// ```
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Export the region as a PDF named after `options.filename`.
    async fn export_pdf(
        &self,
        region: &RenderedRegion,
        options: &ExportOptions,
    ) -> Result<ExportedDocument, ExportError>;

    /// Check if the export pipeline is available.
    ///
    /// Reported by `GET /health` as `pdf_export`.
    async fn is_available(&self) -> bool;
}

/// Fixed page layout for exported notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PdfLayout {
    pub page_size: String,
    /// Rasterizer orientation name.
    pub orientation: String,
    /// Margin on every side, in millimetres.
    pub margin_mm: u32,
    /// JPEG quality for embedded images, 0-100.
    pub image_quality: u8,
    /// Raster resolution; 192 is twice the CSS pixel density.
    pub dpi: u32,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            orientation: "Portrait".to_string(),
            margin_mm: 15,
            image_quality: 98,
            dpi: 192,
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Filename for the download.
    pub filename: String,
}

impl ExportedDocument {
    /// MIME type of every export.
    pub const PDF_CONTENT_TYPE: &'static str = "application/pdf";

    /// Create from PDF bytes.
    pub fn pdf(content: Vec<u8>, filename: impl Into<String>) -> Self {
        Self {
            content,
            content_type: Self::PDF_CONTENT_TYPE.to_string(),
            filename: filename.into(),
        }
    }

    /// Returns true when the bytes carry the PDF magic header.
    pub fn is_complete_pdf(&self) -> bool {
        self.content.starts_with(b"%PDF")
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// The rasterizer binary could not be started.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The rasterizer ran but did not produce a PDF.
    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    /// Nothing to export.
    #[error("Invalid export input: {0}")]
    InvalidInput(String),

    /// Timeout during conversion.
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    /// I/O error during conversion.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a service unavailable error.
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    /// Create a PDF conversion error.
    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
