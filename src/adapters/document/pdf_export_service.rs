//! wkhtmltopdf based export service adapter.
//!
//! Rasterizes the rendered notes region to PDF by piping a standalone HTML
//! document through `wkhtmltopdf` (stdin to stdout). The binary must be
//! installed separately; if it is missing every export fails with
//! `ServiceUnavailable`.
//!
//! # Architecture
//!
//! This adapter implements the `DocumentExportService` port. The application
//! layer only sees the port trait.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::markdown_renderer::html_escape;
use crate::domain::notes::{ExportOptions, RenderedRegion};
use crate::ports::{DocumentExportService, ExportError, ExportedDocument, PdfLayout};

/// Default rasterizer timeout in seconds.
pub const DEFAULT_PDF_TIMEOUT_SECS: u64 = 60;

/// Export service driving `wkhtmltopdf`.
///
/// # Example
///
/// ```rust,ignore
/// let service = PdfExportService::new().with_binary_path("/usr/local/bin/wkhtmltopdf");
/// let doc = service.export_pdf(&region, &ExportOptions::for_prompt("Graph theory")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PdfExportService {
    /// Path to the wkhtmltopdf executable. If None, will search PATH.
    binary_path: Option<String>,

    /// Timeout for one conversion in seconds.
    timeout_secs: u64,

    layout: PdfLayout,
}

impl Default for PdfExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExportService {
    /// Create a new export service with the fixed notes layout.
    pub fn new() -> Self {
        Self {
            binary_path: None,
            timeout_secs: DEFAULT_PDF_TIMEOUT_SECS,
            layout: PdfLayout::default(),
        }
    }

    /// Set a custom path to the rasterizer executable.
    pub fn with_binary_path(mut self, path: impl Into<String>) -> Self {
        self.binary_path = Some(path.into());
        self
    }

    /// Set the timeout for one conversion.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    fn command(&self) -> &str {
        self.binary_path.as_deref().unwrap_or("wkhtmltopdf")
    }

    /// Command-line arguments for the layout; input on stdin, PDF on stdout.
    fn args(&self) -> Vec<String> {
        let margin = format!("{}mm", self.layout.margin_mm);
        let mut args = vec![
            "--page-size".to_string(),
            self.layout.page_size.clone(),
            "--orientation".to_string(),
            self.layout.orientation.clone(),
        ];
        for side in ["--margin-top", "--margin-bottom", "--margin-left", "--margin-right"] {
            args.push(side.to_string());
            args.push(margin.clone());
        }
        args.extend([
            "--image-quality".to_string(),
            self.layout.image_quality.to_string(),
            "--dpi".to_string(),
            self.layout.dpi.to_string(),
            "--encoding".to_string(),
            "utf-8".to_string(),
            "--disable-javascript".to_string(),
            "--disable-local-file-access".to_string(),
            "--quiet".to_string(),
            "-".to_string(),
            "-".to_string(),
        ]);
        args
    }

    /// Builds the standalone document from a copy of the region.
    fn build_document(&self, region: &RenderedRegion, title: Option<&str>) -> String {
        let mut body = String::with_capacity(region.html().len() + 128);
        if let Some(title) = title {
            body.push_str(&format!(
                r#"<h1 style="text-align: center; margin-bottom: 20px;">{}</h1>"#,
                html_escape(title)
            ));
            body.push('\n');
        }
        body.push_str(region.html());

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="notes">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title.unwrap_or("Yellow Notes")),
            css = PDF_CSS,
            body = body
        )
    }

    async fn run(&self, document: String) -> Result<Vec<u8>, ExportError> {
        let mut child = Command::new(self.command())
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ExportError::service_unavailable(format!(
                    "{} is not installed. PDF export requires wkhtmltopdf",
                    self.command()
                )),
                _ => ExportError::io_error(format!("Failed to start {}: {}", self.command(), e)),
            })?;

        let stdin = child.stdin.take();
        let conversion = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(document.as_bytes()).await.map_err(|e| {
                    ExportError::io_error(format!("Failed to write to rasterizer: {}", e))
                })?;
                // Closing stdin signals end of input.
                drop(stdin);
            }
            child.wait_with_output().await.map_err(|e| {
                ExportError::io_error(format!("Rasterizer execution failed: {}", e))
            })
        };

        // Writing stdin counts against the deadline too.
        let output = tokio::time::timeout(Duration::from_secs(self.timeout_secs), conversion)
            .await
            .map_err(|_| ExportError::Timeout(self.timeout_secs))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(format!(
                "rasterizer exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl DocumentExportService for PdfExportService {
    async fn export_pdf(
        &self,
        region: &RenderedRegion,
        options: &ExportOptions,
    ) -> Result<ExportedDocument, ExportError> {
        if region.is_empty() {
            return Err(ExportError::InvalidInput("rendered region is empty".to_string()));
        }

        let document = self.build_document(region, options.title.as_deref());
        tracing::debug!(
            filename = %options.filename,
            html_bytes = document.len(),
            "Rasterizing notes to PDF"
        );

        let bytes = self.run(document).await?;
        let exported = ExportedDocument::pdf(bytes, options.filename.clone());
        if !exported.is_complete_pdf() {
            return Err(ExportError::pdf_failed("rasterizer output is not a complete PDF"));
        }

        Ok(exported)
    }

    async fn is_available(&self) -> bool {
        Command::new(self.command())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

/// Print styling for exported notes.
const PDF_CSS: &str = r#"
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    font-size: 12pt;
    line-height: 1.6;
    color: #1f2937;
    background-color: #ffffff;
    margin: 0;
}

h1, h2, h3, h4 {
    margin-top: 1.2em;
    margin-bottom: 0.5em;
    font-weight: 600;
    line-height: 1.25;
    page-break-after: avoid;
}

h2 {
    border-bottom: 1px solid #fde68a;
    padding-bottom: 0.25rem;
}

blockquote {
    margin: 1em 0;
    padding: 0.5em 1em;
    border-left: 4px solid #facc15;
    background-color: #fefce8;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
    page-break-inside: avoid;
}

th, td {
    padding: 0.4rem;
    text-align: left;
    border: 1px solid #e5e7eb;
}

code {
    font-family: 'Fira Code', 'Consolas', monospace;
    font-size: 0.9em;
    background-color: #f3f4f6;
    padding: 0.1em 0.25em;
    border-radius: 3px;
}

pre {
    background-color: #f3f4f6;
    padding: 0.8em;
    border-radius: 6px;
    white-space: pre-wrap;
    page-break-inside: avoid;
}

pre code {
    background-color: transparent;
    padding: 0;
}
"#;

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════
