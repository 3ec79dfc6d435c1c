//! Generation port.
//!
//! One note request becomes one chat completion. The application only sees
//! [`AIProvider`]; whether the text comes from Groq, another
//! OpenAI-compatible endpoint, the offline templates or a test double is an
//! adapter concern.
//!
//! There is no streaming and no retry: an [`AIError`] is final for the
//! request that produced it.
//!
//! ```ignore
//! struct EchoProvider;
//!
//! #[async_trait]
//! impl AIProvider for EchoProvider {
//!     async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
//!         Ok(CompletionResponse {
//!             content: request.user_text().to_string(),
//!             usage: TokenUsage::default(),
//!             model: "echo".to_string(),
//!             finish_reason: FinishReason::Stop,
//!         })
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::notes::{DetailLevel, GenerationPolicy, GenerationRequest, NoteType};

/// Something that can write notes for a prompt.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Performs exactly one completion call.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Name and model shown on the page and in `/health`.
    fn provider_info(&self) -> ProviderInfo;
}

/// Everything a provider needs for one call.
///
/// Built from a [`GenerationRequest`] with [`CompletionRequest::for_notes`];
/// the builder methods exist for tests and ad-hoc calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    /// Selectors the notes were composed with; the offline templates key on these.
    pub note_type: Option<NoteType>,
    pub detail: Option<DetailLevel>,
}

impl CompletionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// System instruction, prompt, token budget and temperature from [`GenerationPolicy`].
    pub fn for_notes(request: &GenerationRequest) -> Self {
        let detail = request.detail();
        Self::new()
            .with_system_prompt(GenerationPolicy::instruction_for(request))
            .with_message(MessageRole::User, request.prompt())
            .with_max_tokens(GenerationPolicy::max_tokens(detail))
            .with_temperature(GenerationPolicy::temperature(detail))
            .with_selection(request.note_type(), detail)
    }

    pub fn with_message(mut self, role: MessageRole, content: impl Into<String>) -> Self {
        self.messages.push(Message::new(role, content));
        self
    }

    pub fn with_system_prompt(mut self, instruction: impl Into<String>) -> Self {
        self.system_prompt = Some(instruction.into());
        self
    }

    pub fn with_max_tokens(mut self, budget: u32) -> Self {
        self.max_tokens = Some(budget);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_selection(mut self, note_type: NoteType, detail: DetailLevel) -> Self {
        self.note_type = Some(note_type);
        self.detail = Some(detail);
        self
    }

    /// The most recent user message; empty if there is none.
    pub fn user_text(&self) -> &str {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::User)
            .map_or("", |m| m.content.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Role name on the chat-completions wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// What came back from one call.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Markdown exactly as the provider returned it.
    pub content: String,
    pub usage: TokenUsage,
    /// Model the provider reports having used.
    pub model: String,
    pub finish_reason: FinishReason,
}

/// Token counts reported by the provider; zero when it reports none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    /// The token budget ran out; the notes may be cut short.
    Length,
    ContentFilter,
}

/// Identifies the backend behind an [`AIProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// "groq", "templates", "mock", ...
    pub name: String,
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Why a generation call failed.
///
/// All variants surface to the user as the same "Generation failed"
/// notification; the variant only shapes logs and API error details.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AIError {
    /// HTTP 429.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// HTTP 5xx.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// HTTP 401 or 403.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("network error: {0}")]
    Network(String),

    /// Body was not a usable completion.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Any other non-success status, with the provider's `error.message`
    /// or the raw body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Only raised when a client timeout is configured.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl AIError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
