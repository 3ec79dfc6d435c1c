//! Offline template provider.
//!
//! Answers completion requests from the static note templates instead of a
//! remote endpoint. Only wired in when `features.offline_templates` is on;
//! useful for demos and for running without an API key.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::notes::{templates, GenerationRequest};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Model name reported for template output.
pub const TEMPLATE_MODEL: &str = "offline-templates";

/// AIProvider backed by the template table.
#[derive(Debug, Clone, Default)]
pub struct TemplateProvider {
    /// Simulated latency so the page shows its loading state.
    delay: Duration,
}

impl TemplateProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl AIProvider for TemplateProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let notes = GenerationRequest::compose(
            request.user_text(),
            request.note_type.unwrap_or_default(),
            request.detail.unwrap_or_default(),
        )
        .map_err(|e| AIError::InvalidRequest(e.to_string()))?;

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let content = templates::render_template(&notes);
        tracing::debug!(
            note_type = %notes.note_type(),
            detail = %notes.detail(),
            "Served notes from offline template"
        );

        Ok(CompletionResponse {
            content,
            usage: TokenUsage::default(),
            model: TEMPLATE_MODEL.to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("templates", TEMPLATE_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notes::{DetailLevel, NoteType};

    fn request(prompt: &str, note_type: NoteType, detail: DetailLevel) -> CompletionRequest {
        CompletionRequest::for_notes(&GenerationRequest::compose(prompt, note_type, detail).unwrap())
    }

    #[tokio::test]
    async fn serves_template_matching_selection() {
        let provider = TemplateProvider::new();
        let response = provider
            .complete(request("Explain SQL joins with examples", NoteType::Code, DetailLevel::Detailed))
            .await
            .unwrap();

        assert!(response.content.starts_with("# SQL joins - Detailed Code Guide"));
        assert!(response.content.contains("combining data from multiple tables"));
        assert_eq!(response.model, TEMPLATE_MODEL);
    }

    #[tokio::test]
    async fn missing_selection_defaults_to_concise_theory() {
        let provider = TemplateProvider::new();
        let bare = CompletionRequest::new().with_message(crate::ports::MessageRole::User, "Rust traits");
        let response = provider.complete(bare).await.unwrap();
        assert!(response.content.starts_with("# Rust traits - Key Concepts"));
    }

    #[tokio::test]
    async fn blank_prompt_is_invalid_request() {
        let provider = TemplateProvider::new();
        let err = provider.complete(CompletionRequest::new()).await.unwrap_err();
        assert!(matches!(err, AIError::InvalidRequest(_)));
    }

    #[test]
    fn reports_template_provider_info() {
        assert_eq!(
            TemplateProvider::new().provider_info(),
            ProviderInfo::new("templates", "offline-templates")
        );
    }
}
