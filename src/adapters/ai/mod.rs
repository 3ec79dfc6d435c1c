//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - Any OpenAI-compatible chat endpoint (Groq by default)
//! - `TemplateProvider` - Offline note templates, behind a feature flag
//! - `MockAIProvider` - Configurable mock for testing

mod mock_provider;
mod openai_provider;
mod template_provider;

pub use mock_provider::{MockAIProvider, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use template_provider::{TemplateProvider, TEMPLATE_MODEL};
