//! uiwalk LLM Backend Layer
//!
//! Chat-completion backend implementations for the review pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `ChatProvider` trait from
//! `uiwalk-domain`. It supports two named OpenAI-compatible backends, each
//! with a fixed model identifier and endpoint, plus a deterministic mock.
//!
//! # Providers
//!
//! - `MockProvider`: Scripted responses for testing
//! - `ChatClient`: DeepSeek / OpenAI chat-completion API
//!
//! # Examples
//!
//! ```
//! use uiwalk_llm::MockProvider;
//! use uiwalk_domain::traits::{ChatProvider, ChatRequest};
//!
//! let provider = MockProvider::new("{\"cases\": []}");
//! let request = ChatRequest::new("system", "user").json();
//! assert_eq!(provider.chat(&request).unwrap(), "{\"cases\": []}");
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod repair;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uiwalk_domain::traits::{ChatProvider, ChatRequest};

pub use client::{ChatClient, Provider};

/// Errors that can occur during backend operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid or unparseable response from the backend
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credential rejected by the backend
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Scripted chat provider for deterministic testing
///
/// Returns queued responses first (FIFO), then a fixed default, without any
/// network calls. Errors can be injected to exercise fallback paths.
///
/// # Examples
///
/// ```
/// use uiwalk_llm::MockProvider;
/// use uiwalk_domain::traits::{ChatProvider, ChatRequest};
///
/// let provider = MockProvider::new("default");
/// provider.push_response("first");
/// let request = ChatRequest::new("s", "u");
/// assert_eq!(provider.chat(&request).unwrap(), "first");
/// assert_eq!(provider.chat(&request).unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    queue: Arc<Mutex<VecDeque<Result<String, String>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a provider with a fixed default response
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a response to be returned before the default
    pub fn push_response(&self, response: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Ok(response.into()));
    }

    /// Queue an error to be returned before the default
    pub fn push_error(&self, message: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(Err(message.into()));
    }

    /// Number of chat calls made so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("{}")
    }
}

impl ChatProvider for MockProvider {
    type Error = LlmError;

    fn chat(&self, _request: &ChatRequest) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if let Some(next) = self.queue.lock().unwrap().pop_front() {
            return next.map_err(LlmError::Other);
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ChatRequest {
        ChatRequest::new("system", "user")
    }

    #[test]
    fn test_mock_default_response() {
        let provider = MockProvider::new("Test response");
        assert_eq!(provider.chat(&request()).unwrap(), "Test response");
    }

    #[test]
    fn test_mock_queue_order() {
        let provider = MockProvider::new("default");
        provider.push_response("one");
        provider.push_response("two");

        assert_eq!(provider.chat(&request()).unwrap(), "one");
        assert_eq!(provider.chat(&request()).unwrap(), "two");
        assert_eq!(provider.chat(&request()).unwrap(), "default");
    }

    #[test]
    fn test_mock_error_injection() {
        let provider = MockProvider::new("default");
        provider.push_error("connection timed out");

        let result = provider.chat(&request());
        assert!(matches!(result, Err(LlmError::Other(_))));
        // batch continues with the default afterwards
        assert_eq!(provider.chat(&request()).unwrap(), "default");
    }

    #[test]
    fn test_mock_call_count_shared_across_clones() {
        let provider = MockProvider::new("x");
        let clone = provider.clone();

        provider.chat(&request()).unwrap();
        clone.chat(&request()).unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(clone.call_count(), 2);
    }
}
