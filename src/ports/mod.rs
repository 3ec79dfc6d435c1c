//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - chat-completion provider that writes the notes
//! - `RegionRenderer` - markdown to the HTML region shown on the page
//! - `DocumentExportService` - rendered region to PDF

mod ai_provider;
mod document_export_service;
mod region_renderer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, TokenUsage,
};
pub use document_export_service::{
    DocumentExportService, ExportError, ExportedDocument, PdfLayout,
};
pub use region_renderer::RegionRenderer;
