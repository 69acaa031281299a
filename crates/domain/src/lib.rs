//! Storyteller domain.
//!
//! Pure types and functions shared by the engine:
//!
//! - `value_objects/` - creative inputs, language selector, generation stages
//! - `prompt/` - the prompt compiler and its localized wording
//! - `common/` - small string helpers

pub mod common;
pub mod error;
pub mod prompt;
pub mod value_objects;

pub use error::DomainError;

pub use prompt::{compile_prompt, CompiledPrompt, PromptLocale};

pub use value_objects::{
    CreativeInputs, GenerationStage, Language, Listener, StoryCharacter, ToneDimension,
    ToneSliders, DEFAULT_TONE_LEVEL, MAX_TONE_LEVEL,
};
