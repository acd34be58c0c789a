//! Trait definitions for external interactions
//!
//! These traits define the boundary between the review pipeline and the
//! chat-completion backend. Infrastructure implementations live in
//! `uiwalk-llm`.

/// A role-tagged chat message
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    /// Message role: "system" or "user"
    pub role: &'static str,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system", content: content.into() }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user", content: content.into() }
    }
}

/// One chat-completion request
///
/// Temperature is not part of the request: the backend fixes a low sampling
/// temperature for reproducibility.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Ordered system/user messages
    pub messages: Vec<ChatMessage>,

    /// Ask the backend for a JSON-object-shaped reply where supported
    pub json_object: bool,

    /// Optional completion-length cap (classification uses a small one)
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Build a request from a system prompt and a user prompt
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            json_object: false,
            max_tokens: None,
        }
    }

    /// Request a JSON-object-shaped reply
    pub fn json(mut self) -> Self {
        self.json_object = true;
        self
    }

    /// Cap the completion length
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Trait for chat-completion backends
///
/// One blocking call, no retry; every caller owns its fallback. Implemented
/// by the infrastructure layer (`uiwalk-llm`).
pub trait ChatProvider {
    /// Error type for backend operations
    type Error;

    /// Send one chat-completion request and return the first choice's text
    fn chat(&self, request: &ChatRequest) -> Result<String, Self::Error>;
}
