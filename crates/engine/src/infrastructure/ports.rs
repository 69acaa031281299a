//! Port traits for infrastructure boundaries.
//!
//! The text-generation provider is the only external dependency; it sits
//! behind [`LlmPort`] so use cases can be tested without a network.

use std::time::Duration;

use async_trait::async_trait;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The call could not complete (DNS, connect, reset, body read).
    #[error("LLM request failed: {0}")]
    Transport(String),
    /// The call did not finish within the configured timeout.
    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),
    /// The provider answered with a non-success status.
    #[error("Provider returned HTTP {status}")]
    Provider { status: u16, body: String },
    /// Success status, but the body is not the expected envelope or has no text.
    #[error("Invalid response: {0}")]
    MalformedResponse(String),
    /// The credential variable is unset or empty; nothing was sent.
    #[error("Missing credential: {0} is not set")]
    MissingCredential(String),
}

/// Coarse classification of [`LlmError`] for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Provider,
    MalformedResponse,
    Configuration,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Provider => "provider",
            Self::MalformedResponse => "malformed_response",
            Self::Configuration => "configuration",
        }
    }
}

impl LlmError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) | Self::Timeout(_) => FailureKind::Transport,
            Self::Provider { .. } => FailureKind::Provider,
            Self::MalformedResponse(_) => FailureKind::MalformedResponse,
            Self::MissingCredential(_) => FailureKind::Configuration,
        }
    }
}

// =============================================================================
// External Service Ports
// =============================================================================

/// LLM request/response types
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    /// Conversation messages after the system prompt
    pub messages: Vec<ChatMessage>,
    /// System prompt / persona
    pub system_prompt: Option<String>,
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            system_prompt: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// A message in the conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Role of a message sender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// Response from the LLM
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// The generated text content, never blank
    pub content: String,
    /// Finish reason
    pub finish_reason: FinishReason,
    /// Token usage
    pub usage: Option<TokenUsage>,
}

impl LlmResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
            usage: None,
        }
    }
}

/// Reason the generation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Unknown,
}

/// Token usage information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    /// Perform exactly one completion call. Implementations must not retry.
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kinds() {
        assert_eq!(LlmError::Transport("reset".into()).kind(), FailureKind::Transport);
        assert_eq!(
            LlmError::Timeout(Duration::from_secs(1)).kind(),
            FailureKind::Transport
        );
        assert_eq!(
            LlmError::Provider {
                status: 500,
                body: String::new()
            }
            .kind(),
            FailureKind::Provider
        );
        assert_eq!(
            LlmError::MalformedResponse("{}".into()).kind(),
            FailureKind::MalformedResponse
        );
        assert_eq!(
            LlmError::MissingCredential("OPENAI_API_KEY".into()).kind(),
            FailureKind::Configuration
        );
    }

    #[test]
    fn test_request_builder() {
        let request = LlmRequest::new(vec![ChatMessage::user("hi")])
            .with_system_prompt("persona")
            .with_temperature(0.9)
            .with_max_tokens(Some(1200));
        assert_eq!(request.system_prompt.as_deref(), Some("persona"));
        assert_eq!(request.temperature, Some(0.9));
        assert_eq!(request.max_tokens, Some(1200));
        assert_eq!(request.messages[0].role.as_str(), "user");
    }
}
