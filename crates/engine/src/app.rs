//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{config::GenerationSettings, ports::LlmPort};
use crate::use_cases::{GenerateStory, StoryUseCases};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub story: StoryUseCases,
}

impl App {
    /// Wire the use cases around a text-generation provider.
    pub fn new(llm: Arc<dyn LlmPort>, settings: GenerationSettings) -> Self {
        let generate = Arc::new(GenerateStory::new(llm, settings));

        Self {
            use_cases: UseCases {
                story: StoryUseCases::new(generate),
            },
        }
    }
}
