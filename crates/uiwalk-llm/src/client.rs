//! Chat-completion client for OpenAI-compatible backends
//!
//! Two named backend configurations are supported, each fixing its own model
//! identifier and endpoint. Sampling temperature is fixed low for
//! reproducibility. Each call is a single attempt; callers own their
//! fallbacks, so there is no retry loop here.

use crate::LlmError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};
use uiwalk_domain::traits::{ChatProvider, ChatRequest};

/// Fixed sampling temperature for all calls
pub const TEMPERATURE: f64 = 0.3;

/// Default HTTP timeout for backend requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Named backend configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// DeepSeek chat API
    Deepseek,

    /// OpenAI chat API
    Openai,
}

impl Provider {
    /// Fixed model identifier for this backend
    pub fn model(&self) -> &'static str {
        match self {
            Provider::Deepseek => "deepseek-chat",
            Provider::Openai => "gpt-4",
        }
    }

    /// Chat-completions base endpoint for this backend
    pub fn base_url(&self) -> &'static str {
        match self {
            Provider::Deepseek => "https://api.deepseek.com",
            Provider::Openai => "https://api.openai.com/v1",
        }
    }

    /// Environment variable the credential is read from
    pub fn api_key_env(&self) -> &'static str {
        match self {
            Provider::Deepseek => "DEEPSEEK_API_KEY",
            Provider::Openai => "OPENAI_API_KEY",
        }
    }

    /// Parse a provider name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "deepseek" => Some(Provider::Deepseek),
            "openai" => Some(Provider::Openai),
            _ => None,
        }
    }
}

/// Chat-completion API client
///
/// Constructed only when a credential is available; without one the pipeline
/// stays in fallback mode for the whole session.
pub struct ChatClient {
    provider: Provider,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

impl ChatClient {
    /// Create a client for a named backend with an explicit credential
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            provider,
            api_key: api_key.into(),
            base_url: provider.base_url().to_string(),
            client,
        })
    }

    /// Create a client from the backend's environment variable
    ///
    /// Returns `None` when no credential is configured. This is not an
    /// error: the caller degrades to its deterministic alternative.
    pub fn from_env(provider: Provider) -> Option<Self> {
        match std::env::var(provider.api_key_env()) {
            Ok(key) if !key.trim().is_empty() => Self::new(provider, key).ok(),
            _ => {
                info!(
                    "{} not set; running without an AI backend",
                    provider.api_key_env()
                );
                None
            }
        }
    }

    /// Override the base endpoint (for tests against a local stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The backend this client talks to
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Send one chat-completion request and return the first choice's text
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let messages: Vec<_> = request
            .messages
            .iter()
            .map(|m| json!({"role": m.role, "content": m.content}))
            .collect();

        let mut body = json!({
            "model": self.provider.model(),
            "messages": messages,
            "temperature": TEMPERATURE,
        });
        if request.json_object {
            body["response_format"] = json!({"type": "json_object"});
        }
        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        debug!("Calling {} ({})", url, self.provider.model());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(LlmError::Auth("credential rejected".to_string()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Empty choice list".to_string()))
    }
}

impl ChatProvider for ChatClient {
    type Error = LlmError;

    fn chat(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call; the pipeline is strictly
        // sequential so one throwaway runtime per call is acceptable.
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?;
        runtime.block_on(self.complete(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_presets() {
        assert_eq!(Provider::Deepseek.model(), "deepseek-chat");
        assert_eq!(Provider::Deepseek.base_url(), "https://api.deepseek.com");
        assert_eq!(Provider::Openai.model(), "gpt-4");
        assert_eq!(Provider::Deepseek.api_key_env(), "DEEPSEEK_API_KEY");
    }

    #[test]
    fn test_provider_parse() {
        assert_eq!(Provider::parse("DeepSeek"), Some(Provider::Deepseek));
        assert_eq!(Provider::parse(" openai "), Some(Provider::Openai));
        assert_eq!(Provider::parse("claude"), None);
    }

    #[test]
    fn test_client_creation() {
        let client = ChatClient::new(Provider::Deepseek, "test-key").unwrap();
        assert_eq!(client.provider(), Provider::Deepseek);
        assert_eq!(client.base_url, "https://api.deepseek.com");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_communication_error() {
        let client = ChatClient::new(Provider::Deepseek, "test-key")
            .unwrap()
            .with_base_url("http://127.0.0.1:9");

        let request = ChatRequest::new("s", "u");
        let result = client.complete(&request).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
