//! Generation endpoint configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest client timeout accepted, in seconds.
const MAX_TIMEOUT_SECS: u64 = 600;

/// Chat-completion endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// API key sent as a bearer token
    pub api_key: Option<Secret<String>>,

    /// Endpoint base, without `/chat/completions`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Optional client timeout in seconds; unset means no timeout
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Get timeout as Duration, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Validate endpoint configuration
    ///
    /// The key is only required when the remote endpoint will be used.
    pub fn validate(&self, require_key: bool) -> Result<(), ValidationError> {
        if require_key && !self.has_api_key() {
            return Err(ValidationError::MissingRequired("YELLOW_NOTES__AI__API_KEY"));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyModel);
        }
        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ValidationError::InvalidTimeout {
                    max: MAX_TIMEOUT_SECS,
                });
            }
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "compound-beta".to_string()
}
