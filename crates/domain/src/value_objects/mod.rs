//! Value objects - Immutable objects defined by their attributes

mod creative_inputs;
mod generation_stage;
mod language;
mod tone;

pub use creative_inputs::{CreativeInputs, Listener, StoryCharacter};
pub use generation_stage::GenerationStage;
pub use language::Language;
pub use tone::{ToneDimension, ToneSliders, DEFAULT_TONE_LEVEL, MAX_TONE_LEVEL};
