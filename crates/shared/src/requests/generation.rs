//! Story generation request payload.
//!
//! Two client schemas post to the same endpoint:
//!
//! - simple: `listeners` + `simpleCharacters` (`{name, description}` each)
//! - detailed: `characters` (`{name, age, gender, description, quirks}`),
//!   free-text `audience`, and a `style` map of tone sliders
//!
//! Both deserialize into [`GenerateStoryRequest`] and translate into one
//! canonical [`CreativeInputs`].

use serde::{Deserialize, Serialize};

use storyteller_domain::{
    CreativeInputs, DomainError, Language, Listener, StoryCharacter, ToneDimension, ToneSliders,
};

use super::nullable::null_as_default;

/// `{name, description}` entry used by the simple schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Character entry used by the detailed schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub age: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quirks: String,
}

/// Tone sliders as sent by the detailed form.
///
/// Keys are the Dutch slider names the form uses; English names are
/// accepted as aliases. Missing sliders keep the default level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneSlidersData {
    #[serde(rename = "spannend", alias = "suspense", default, skip_serializing_if = "Option::is_none")]
    pub suspense: Option<u8>,
    #[serde(rename = "grappig", alias = "humor", default, skip_serializing_if = "Option::is_none")]
    pub humor: Option<u8>,
    #[serde(rename = "absurd", alias = "absurdity", default, skip_serializing_if = "Option::is_none")]
    pub absurdity: Option<u8>,
    #[serde(rename = "leerzaam", alias = "educational", default, skip_serializing_if = "Option::is_none")]
    pub educational: Option<u8>,
    #[serde(
        rename = "avontuurlijk",
        alias = "adventurousness",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub adventurousness: Option<u8>,
    #[serde(rename = "inspirerend", alias = "inspiration", default, skip_serializing_if = "Option::is_none")]
    pub inspiration: Option<u8>,
}

impl ToneSlidersData {
    /// Validate levels and build domain sliders.
    pub fn to_domain(&self) -> Result<ToneSliders, DomainError> {
        let levels = [
            (ToneDimension::Suspense, self.suspense),
            (ToneDimension::Humor, self.humor),
            (ToneDimension::Absurdity, self.absurdity),
            (ToneDimension::Educational, self.educational),
            (ToneDimension::Adventurousness, self.adventurousness),
            (ToneDimension::Inspiration, self.inspiration),
        ];

        levels
            .into_iter()
            .try_fold(ToneSliders::new(), |sliders, (dimension, level)| match level {
                Some(level) => sliders.with_level(dimension, level),
                None => Ok(sliders),
            })
    }
}

/// Body of `POST /api/generate`.
///
/// Every field is optional at the wire level so that a missing language can
/// be reported as invalid input instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub listeners: Vec<PersonData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub simple_characters: Vec<PersonData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub characters: Vec<CharacterData>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub audience: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synopsis: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub moral: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author_style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ToneSlidersData>,
}

impl GenerateStoryRequest {
    /// Translate the wire payload into canonical creative inputs.
    ///
    /// - `language` must be present and be `nl` or `en`
    /// - detailed `characters` win over `simpleCharacters` when they hold
    ///   any non-blank entry
    /// - non-blank `audience` text becomes a trailing listener
    /// - tone sliders must lie in `0..=5`
    pub fn into_creative_inputs(self) -> Result<CreativeInputs, DomainError> {
        let language: Language = self
            .language
            .as_deref()
            .ok_or_else(|| DomainError::invalid_input("language is required"))?
            .parse()?;

        let tone = self.style.as_ref().map(ToneSlidersData::to_domain).transpose()?;

        let detailed: Vec<StoryCharacter> = self
            .characters
            .into_iter()
            .map(|c| StoryCharacter {
                name: c.name,
                age: c.age,
                gender: c.gender,
                description: c.description,
                quirks: c.quirks,
            })
            .filter(|c| !c.is_blank())
            .collect();

        let characters = if detailed.is_empty() {
            self.simple_characters
                .into_iter()
                .map(|p| StoryCharacter::new(p.name, p.description))
                .collect()
        } else {
            if !self.simple_characters.is_empty() {
                tracing::debug!(
                    ignored = self.simple_characters.len(),
                    "Detailed characters supplied, ignoring simple characters"
                );
            }
            detailed
        };

        let mut listeners: Vec<Listener> = self
            .listeners
            .into_iter()
            .map(|p| Listener::new(p.name, p.description))
            .collect();
        if !self.audience.trim().is_empty() {
            listeners.push(Listener::new(self.audience, ""));
        }

        let mut inputs = CreativeInputs::new(language)
            .with_listeners(listeners)
            .with_characters(characters)
            .with_synopsis(self.synopsis)
            .with_elements(self.elements)
            .with_moral(self.moral)
            .with_author_style(self.author_style);

        if let Some(story_language) = self.story_language {
            inputs = inputs.with_story_language(story_language);
        }
        if let Some(tone) = tone {
            inputs = inputs.with_tone(tone);
        }

        Ok(inputs)
    }
}
