//! Scripted provider for tests and local demos.
//!
//! Replies are queued up front and handed out in order; once the queue is
//! empty every call gets [`FALLBACK_CONTENT`]. Each request is recorded so
//! tests can check what would have gone over the wire.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("# Binary Search\n\n...")
//!     .with_error(AIError::unavailable("503"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Content returned once the scripted replies run out.
pub const FALLBACK_CONTENT: &str = "# Mock notes";

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success {
        content: String,
        finish_reason: FinishReason,
        /// Latency for this reply, on top of the provider-wide delay.
        delay: Duration,
    },
    Error(AIError),
}

impl MockResponse {
    fn fallback() -> Self {
        MockResponse::Success {
            content: FALLBACK_CONTENT.to_string(),
            finish_reason: FinishReason::Stop,
            delay: Duration::ZERO,
        }
    }
}

/// [`AIProvider`] that replays scripted replies.
///
/// Clones share the queue and the call log.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    script: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
    info: ProviderInfo,
    delay: Duration,
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self {
            script: Arc::default(),
            calls: Arc::default(),
            info: ProviderInfo::new("mock", "mock-notes"),
            delay: Duration::ZERO,
        }
    }
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_delayed_response(content, Duration::ZERO)
    }

    /// Queues a reply that arrives after `delay`; used to stage late responses.
    pub fn with_delayed_response(self, content: impl Into<String>, delay: Duration) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
            finish_reason: FinishReason::Stop,
            delay,
        })
    }

    pub fn with_error(self, error: AIError) -> Self {
        self.push(MockResponse::Error(error))
    }

    /// Latency added to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_provider_info(mut self, info: ProviderInfo) -> Self {
        self.info = info;
        self
    }

    pub fn call_count(&self) -> usize {
        guard(&self.calls).len()
    }

    /// Requests received so far, oldest first.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        guard(&self.calls).clone()
    }

    pub fn clear_calls(&self) {
        guard(&self.calls).clear();
    }

    fn push(self, reply: MockResponse) -> Self {
        guard(&self.script).push_back(reply);
        self
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        guard(&self.calls).push(request);
        // Pop before sleeping so concurrent calls keep their queue order.
        let reply = guard(&self.script)
            .pop_front()
            .unwrap_or_else(MockResponse::fallback);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match reply {
            MockResponse::Error(err) => Err(err),
            MockResponse::Success {
                content,
                finish_reason,
                delay,
            } => {
                if !delay.is_zero() {
                    sleep(delay).await;
                }
                Ok(CompletionResponse {
                    content,
                    usage: TokenUsage::new(10, 20),
                    model: self.info.model.clone(),
                    finish_reason,
                })
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}
