//! Use cases - User story orchestration.
//!
//! The engine serves one user story: turn creative inputs into a story.

pub mod story;

pub use story::{GenerateStory, GenerationFailure, GenerationResult, StoryUseCases};
