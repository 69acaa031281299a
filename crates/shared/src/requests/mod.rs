//! Inbound request payloads.

mod generation;
mod nullable;

pub use generation::{CharacterData, GenerateStoryRequest, PersonData, ToneSlidersData};
