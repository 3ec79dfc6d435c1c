//! Document adapters - rendering and PDF export.
//!
//! - `MarkdownRenderer` - markdown to the HTML region shown on the page
//! - `PdfExportService` - region to PDF through wkhtmltopdf
//! - `MockExportService` - configurable exporter for tests

mod markdown_renderer;
mod mock_export_service;
mod pdf_export_service;

pub use markdown_renderer::{html_escape, MarkdownRenderer};
pub use mock_export_service::MockExportService;
pub use pdf_export_service::{PdfExportService, DEFAULT_PDF_TIMEOUT_SECS};
