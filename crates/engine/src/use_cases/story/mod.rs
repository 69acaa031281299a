//! Story generation use cases.
//!
//! Compiles creative inputs into a prompt and performs exactly one provider
//! call. Every post-dispatch failure collapses into
//! [`GenerationResult::Failed`]; the caller never sees partial text.

use std::fmt;
use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use storyteller_domain::{compile_prompt, CreativeInputs, GenerationStage};

use crate::infrastructure::config::GenerationSettings;
use crate::infrastructure::ports::{
    ChatMessage, FailureKind, FinishReason, LlmError, LlmPort, LlmRequest,
};

/// Container for story use cases.
pub struct StoryUseCases {
    pub generate: Arc<GenerateStory>,
}

impl StoryUseCases {
    pub fn new(generate: Arc<GenerateStory>) -> Self {
        Self { generate }
    }
}

/// Outcome of one generation request.
#[derive(Debug)]
pub enum GenerationResult {
    Story(String),
    Failed(GenerationFailure),
}

impl GenerationResult {
    pub fn story(&self) -> Option<&str> {
        match self {
            Self::Story(story) => Some(story),
            Self::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            Self::Story(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// Opaque generation failure.
///
/// Keeps the underlying cause for logs and tests; the HTTP layer only
/// reports that generation failed.
#[derive(Debug, thiserror::Error)]
#[error("Story generation failed ({kind})", kind = .source.kind().as_str())]
pub struct GenerationFailure {
    #[source]
    source: LlmError,
}

impl GenerationFailure {
    pub fn kind(&self) -> FailureKind {
        self.source.kind()
    }

    pub fn cause(&self) -> &LlmError {
        &self.source
    }
}

impl From<LlmError> for GenerationFailure {
    fn from(source: LlmError) -> Self {
        Self { source }
    }
}

/// Short per-request id for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GenerationId(Uuid);

impl GenerationId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.0.simple().to_string();
        f.write_str(&full[..8])
    }
}

/// Lifecycle tracker for a single request.
struct Attempt {
    stage: GenerationStage,
}

impl Attempt {
    fn new() -> Self {
        Self {
            stage: GenerationStage::Idle,
        }
    }

    fn advance(&mut self, next: GenerationStage) {
        match self.stage.transition_to(next) {
            Ok(stage) => {
                tracing::debug!(from = %self.stage, to = %stage, "Generation stage changed");
                self.stage = stage;
            }
            Err(e) => tracing::error!(error = %e, "Generation lifecycle violated"),
        }
    }
}

/// Compile a prompt and submit it to the provider once.
pub struct GenerateStory {
    llm: Arc<dyn LlmPort>,
    settings: GenerationSettings,
}

impl GenerateStory {
    pub fn new(llm: Arc<dyn LlmPort>, settings: GenerationSettings) -> Self {
        Self { llm, settings }
    }

    pub async fn execute(&self, inputs: CreativeInputs) -> GenerationResult {
        let id = GenerationId::new();
        let span = tracing::info_span!(
            "generate_story",
            generation_id = %id,
            language = %inputs.language()
        );
        self.run(inputs).instrument(span).await
    }

    async fn run(&self, inputs: CreativeInputs) -> GenerationResult {
        let mut attempt = Attempt::new();

        attempt.advance(GenerationStage::Compiling);
        let prompt = compile_prompt(&inputs);
        drop(inputs);

        let request = LlmRequest::new(vec![ChatMessage::user(prompt.user)])
            .with_system_prompt(prompt.system)
            .with_temperature(self.settings.temperature)
            .with_max_tokens(Some(self.settings.max_tokens));

        tracing::debug!(
            prompt_chars = request.messages[0].content.chars().count(),
            "Prompt compiled"
        );

        attempt.advance(GenerationStage::AwaitingProvider);
        let outcome = self
            .llm
            .generate(request)
            .await
            .and_then(|response| {
                if response.content.trim().is_empty() {
                    Err(LlmError::MalformedResponse(
                        "Provider returned empty content".to_string(),
                    ))
                } else {
                    Ok(response)
                }
            });

        match outcome {
            Ok(response) => {
                attempt.advance(GenerationStage::Succeeded);
                if response.finish_reason == FinishReason::Length {
                    tracing::warn!("Story hit the max token limit");
                }
                tracing::info!(
                    story_chars = response.content.chars().count(),
                    total_tokens = response.usage.map(|u| u.total_tokens),
                    "Story generated"
                );
                GenerationResult::Story(response.content)
            }
            Err(e) => {
                attempt.advance(GenerationStage::Failed);
                let failure = GenerationFailure::from(e);
                match failure.cause() {
                    LlmError::Provider { status, body } => tracing::warn!(
                        kind = failure.kind().as_str(),
                        status = *status,
                        body = %body,
                        "Story generation failed"
                    ),
                    other => tracing::warn!(
                        kind = failure.kind().as_str(),
                        error = %other,
                        "Story generation failed"
                    ),
                }
                GenerationResult::Failed(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use mockall::predicate::always;
    use storyteller_domain::{Language, Listener};

    use crate::infrastructure::ports::{LlmResponse, MessageRole, MockLlmPort};

    fn use_case(llm: MockLlmPort) -> GenerateStory {
        GenerateStory::new(Arc::new(llm), GenerationSettings::default())
    }

    fn inputs() -> CreativeInputs {
        CreativeInputs::new(Language::En)
            .with_listeners(vec![Listener::new("Mila", "loves dragons")])
            .with_synopsis("A dragon learns to share")
    }

    #[tokio::test]
    async fn when_provider_answers_then_story_is_relayed_unmodified() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .with(always())
            .times(1)
            .returning(|_| Ok(LlmResponse::new("  Once upon a time...\n")));

        let result = use_case(llm).execute(inputs()).await;

        assert_eq!(result.story(), Some("  Once upon a time...\n"));
    }

    #[tokio::test]
    async fn test_request_carries_compiled_prompt_and_fixed_parameters() {
        let expected = compile_prompt(&inputs());

        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(move |request: &LlmRequest| {
                request.system_prompt.as_deref() == Some(expected.system.as_str())
                    && request.messages.len() == 1
                    && request.messages[0].role == MessageRole::User
                    && request.messages[0].content == expected.user
                    && request.temperature == Some(0.9)
                    && request.max_tokens == Some(1200)
            })
            .times(1)
            .returning(|_| Ok(LlmResponse::new("story")));

        let result = use_case(llm).execute(inputs()).await;
        assert!(result.story().is_some());
    }

    #[tokio::test]
    async fn when_provider_fails_then_single_attempt_and_failed_result() {
        let cases = [
            (
                LlmError::Provider {
                    status: 500,
                    body: "oops".into(),
                },
                FailureKind::Provider,
            ),
            (
                LlmError::MalformedResponse("{}".into()),
                FailureKind::MalformedResponse,
            ),
            (
                LlmError::Timeout(Duration::from_secs(60)),
                FailureKind::Transport,
            ),
            (
                LlmError::Transport("connection refused".into()),
                FailureKind::Transport,
            ),
            (
                LlmError::MissingCredential("OPENAI_API_KEY".into()),
                FailureKind::Configuration,
            ),
        ];

        for (error, kind) in cases {
            let mut llm = MockLlmPort::new();
            let mut error = Some(error);
            llm.expect_generate()
                .times(1)
                .returning(move |_| Err(error.take().unwrap_or(LlmError::Transport("again".into()))));

            let result = use_case(llm).execute(inputs()).await;

            assert!(result.story().is_none());
            assert_eq!(result.failure().map(GenerationFailure::kind), Some(kind));
        }
    }

    #[tokio::test]
    async fn when_port_returns_blank_content_then_failed_not_empty_story() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Ok(LlmResponse::new("   ")));

        let result = use_case(llm).execute(inputs()).await;

        assert!(result.story().is_none());
        assert_eq!(
            result.failure().map(GenerationFailure::kind),
            Some(FailureKind::MalformedResponse)
        );
    }

    #[test]
    fn test_failure_message_is_generic() {
        let failure = GenerationFailure::from(LlmError::Provider {
            status: 401,
            body: "invalid api key sk-...".into(),
        });
        assert_eq!(failure.to_string(), "Story generation failed (provider)");
    }

    #[test]
    fn test_attempt_follows_lifecycle() {
        let mut attempt = Attempt::new();
        attempt.advance(GenerationStage::Compiling);
        attempt.advance(GenerationStage::AwaitingProvider);
        attempt.advance(GenerationStage::Succeeded);
        assert_eq!(attempt.stage, GenerationStage::Succeeded);

        // terminal: a late failure must not overwrite success
        attempt.advance(GenerationStage::Failed);
        assert_eq!(attempt.stage, GenerationStage::Succeeded);
    }

    #[test]
    fn test_generation_id_is_short() {
        assert_eq!(GenerationId::new().to_string().len(), 8);
    }
}
