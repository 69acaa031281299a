//! Creative inputs - the structured story parameters collected from a user
//!
//! Every field except `language` is optional. Blank text counts as absent;
//! the prompt compiler decides what to omit, so nothing is filtered here
//! beyond dropping list entries that carry no text at all.

use super::language::Language;
use super::tone::ToneSliders;
use crate::common::StrExt;

/// Someone the story is meant for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listener {
    pub name: String,
    pub description: String,
}

impl Listener {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// True when neither name nor description holds any text.
    pub fn is_blank(&self) -> bool {
        self.name.is_blank() && self.description.is_blank()
    }
}

/// A character appearing in the story.
///
/// The simple form only fills `name` and `description`; the detailed form
/// also supplies age, gender and quirks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryCharacter {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub description: String,
    pub quirks: String,
}

impl StoryCharacter {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: impl Into<String>) -> Self {
        self.age = age.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_quirks(mut self, quirks: impl Into<String>) -> Self {
        self.quirks = quirks.into();
        self
    }

    /// True when every field is blank.
    pub fn is_blank(&self) -> bool {
        [
            &self.name,
            &self.age,
            &self.gender,
            &self.description,
            &self.quirks,
        ]
        .iter()
        .all(|field| field.is_blank())
    }
}

/// Immutable set of story parameters for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreativeInputs {
    language: Language,
    story_language: Option<String>,
    listeners: Vec<Listener>,
    characters: Vec<StoryCharacter>,
    synopsis: String,
    elements: String,
    moral: String,
    author_style: String,
    tone: Option<ToneSliders>,
}

impl CreativeInputs {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            story_language: None,
            listeners: Vec::new(),
            characters: Vec::new(),
            synopsis: String::new(),
            elements: String::new(),
            moral: String::new(),
            author_style: String::new(),
            tone: None,
        }
    }

    // ── Builder Methods ──────────────────────────────────────────────────

    pub fn with_story_language(mut self, story_language: impl Into<String>) -> Self {
        self.story_language = Some(story_language.into());
        self
    }

    /// Appends listeners, skipping entries without any text.
    pub fn with_listeners(mut self, listeners: impl IntoIterator<Item = Listener>) -> Self {
        self.listeners
            .extend(listeners.into_iter().filter(|l| !l.is_blank()));
        self
    }

    /// Appends characters, skipping entries without any text.
    pub fn with_characters(mut self, characters: impl IntoIterator<Item = StoryCharacter>) -> Self {
        self.characters
            .extend(characters.into_iter().filter(|c| !c.is_blank()));
        self
    }

    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    pub fn with_elements(mut self, elements: impl Into<String>) -> Self {
        self.elements = elements.into();
        self
    }

    pub fn with_moral(mut self, moral: impl Into<String>) -> Self {
        self.moral = moral.into();
        self
    }

    pub fn with_author_style(mut self, author_style: impl Into<String>) -> Self {
        self.author_style = author_style.into();
        self
    }

    pub fn with_tone(mut self, tone: ToneSliders) -> Self {
        self.tone = Some(tone);
        self
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn language(&self) -> Language {
        self.language
    }

    /// Explicit story language, if the caller named a non-blank one.
    pub fn story_language_override(&self) -> Option<&str> {
        self.story_language.as_deref().and_then(|s| s.non_blank())
    }

    /// Language the story body must be written in.
    ///
    /// The override wins when present; otherwise the selector's own name.
    pub fn resolved_story_language(&self) -> &str {
        self.story_language_override()
            .unwrap_or_else(|| self.language.native_name())
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn characters(&self) -> &[StoryCharacter] {
        &self.characters
    }

    pub fn synopsis(&self) -> &str {
        &self.synopsis
    }

    pub fn elements(&self) -> &str {
        &self.elements
    }

    pub fn moral(&self) -> &str {
        &self.moral
    }

    pub fn author_style(&self) -> &str {
        &self.author_style
    }

    pub fn tone(&self) -> Option<&ToneSliders> {
        self.tone.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_optional_content() {
        let inputs = CreativeInputs::new(Language::En);
        assert!(inputs.listeners().is_empty());
        assert!(inputs.characters().is_empty());
        assert!(inputs.synopsis().is_empty());
        assert!(inputs.tone().is_none());
        assert_eq!(inputs.story_language_override(), None);
    }

    #[test]
    fn test_resolved_story_language_defaults_to_selector() {
        assert_eq!(
            CreativeInputs::new(Language::Nl).resolved_story_language(),
            "Nederlands"
        );
        assert_eq!(
            CreativeInputs::new(Language::En).resolved_story_language(),
            "English"
        );
    }

    #[test]
    fn test_resolved_story_language_uses_trimmed_override() {
        let inputs = CreativeInputs::new(Language::Nl).with_story_language("  Frysk ");
        assert_eq!(inputs.resolved_story_language(), "Frysk");
    }

    #[test]
    fn when_override_is_blank_then_selector_language_is_used() {
        let inputs = CreativeInputs::new(Language::En).with_story_language("   ");
        assert_eq!(inputs.story_language_override(), None);
        assert_eq!(inputs.resolved_story_language(), "English");
    }

    #[test]
    fn test_blank_entries_are_dropped_and_order_kept() {
        let inputs = CreativeInputs::new(Language::En)
            .with_listeners(vec![
                Listener::new("Mila", "loves horses"),
                Listener::new(" ", ""),
                Listener::new("Sam", ""),
            ])
            .with_characters(vec![
                StoryCharacter::default(),
                StoryCharacter::new("Hugo", "curious").with_age("5"),
            ]);

        let names: Vec<&str> = inputs.listeners().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Mila", "Sam"]);
        assert_eq!(inputs.characters().len(), 1);
        assert_eq!(inputs.characters()[0].age, "5");
    }

    #[test]
    fn test_character_with_only_quirks_is_kept() {
        let character = StoryCharacter::default().with_quirks("wiggles toes");
        assert!(!character.is_blank());
    }
}
