//! Localized prompt wording.
//!
//! One fixed table per [`Language`]. Templates carry a single placeholder
//! (`{lang}`, `{list}`, `{author}` or `{age}`) that is substituted once.

use crate::value_objects::{Language, ToneDimension};

/// Wording used to assemble prompts in one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLocale {
    /// System role instruction establishing the storyteller persona.
    pub system_instruction: &'static str,
    /// Opening directive; `{lang}` is the resolved story language.
    pub opening: &'static str,
    /// Audience clause; `{list}` is the rendered listeners.
    pub audience: &'static str,
    /// Characters clause; `{list}` is the rendered characters.
    pub characters: &'static str,
    pub storyline_label: &'static str,
    pub elements_label: &'static str,
    pub message_label: &'static str,
    pub tone_label: &'static str,
    /// Author style clause; `{author}` is the trimmed author reference.
    pub author_style: &'static str,
    /// How a character's age is phrased; `{age}` is the raw age text.
    pub age: &'static str,
    /// Display names indexed like [`ToneDimension::ALL`].
    pub dimensions: [&'static str; 6],
}

static EN: PromptLocale = PromptLocale {
    system_instruction: "You are a creative, humorous and touching storyteller for children.",
    opening: "Write a fun and original story to read aloud in {lang}.",
    audience: "It is intended for: {list}.",
    characters: "The main characters are: {list}.",
    storyline_label: "Storyline",
    elements_label: "Elements to include",
    message_label: "Message",
    tone_label: "Tone",
    author_style: "Write it in the style of {author}.",
    age: "age {age}",
    dimensions: [
        "suspense",
        "humor",
        "absurdity",
        "educational value",
        "adventurousness",
        "inspiration",
    ],
};

static NL: PromptLocale = PromptLocale {
    system_instruction:
        "Je bent een creatieve, grappige en ontroerende verhalenverteller voor kinderen.",
    opening: "Schrijf een leuk en origineel voorleesverhaaltje in het {lang}.",
    audience: "Het is bedoeld voor: {list}.",
    characters: "De hoofdpersonages zijn: {list}.",
    storyline_label: "Verhaallijn",
    elements_label: "Details",
    message_label: "Boodschap",
    tone_label: "Toon",
    author_style: "Schrijf het in de stijl van {author}.",
    age: "{age} jaar",
    dimensions: [
        "spannend",
        "grappig",
        "absurd",
        "leerzaam",
        "avontuurlijk",
        "inspirerend",
    ],
};

impl PromptLocale {
    pub fn for_language(language: Language) -> &'static PromptLocale {
        match language {
            Language::En => &EN,
            Language::Nl => &NL,
        }
    }

    pub fn dimension_name(&self, dimension: ToneDimension) -> &'static str {
        self.dimensions[dimension.index()]
    }
}

/// Substitute `placeholder` in `template` with `value`.
pub(crate) fn fill(template: &str, placeholder: &str, value: &str) -> String {
    template.replacen(placeholder, value, 1)
}
