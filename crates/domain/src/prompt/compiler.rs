//! Prompt compiler
//!
//! Turns [`CreativeInputs`] into the system and user messages sent to the
//! text-generation provider. Pure and deterministic: the same inputs always
//! produce byte-identical output.
//!
//! User prompt layout:
//!
//! ```text
//! <opening directive>
//!
//! <audience clause>          (only with listeners)
//! <characters clause>        (only with characters)
//! <storyline label>: <text>
//! <elements label>: <text>
//! <message label>: <text>
//! <tone label>: d: n/5, ...  (only with tone sliders)
//! <author style clause>      (only with a non-blank author)
//! ```

use super::locale::{fill, PromptLocale};
use crate::common::none_if_blank;
use crate::value_objects::{CreativeInputs, Listener, StoryCharacter, ToneSliders, MAX_TONE_LEVEL};

const ROSTER_SEPARATOR: &str = ", ";

/// The two messages making up a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPrompt {
    /// System role instruction (storyteller persona).
    pub system: String,
    /// User role instruction assembled from clauses.
    pub user: String,
}

/// Compile creative inputs into a system instruction and a user prompt.
///
/// Clause labels always follow [`CreativeInputs::language`]; only the
/// language named in the opening directive follows the story language
/// override.
pub fn compile_prompt(inputs: &CreativeInputs) -> CompiledPrompt {
    let locale = PromptLocale::for_language(inputs.language());

    CompiledPrompt {
        system: locale.system_instruction.to_string(),
        user: build_user_prompt(inputs, locale),
    }
}

fn build_user_prompt(inputs: &CreativeInputs, locale: &PromptLocale) -> String {
    let opening = fill(locale.opening, "{lang}", inputs.resolved_story_language());

    let mut clauses: Vec<String> = Vec::new();

    if let Some(list) = roster(inputs.listeners().iter().map(render_listener)) {
        clauses.push(fill(locale.audience, "{list}", &list));
    }

    if let Some(list) = roster(
        inputs
            .characters()
            .iter()
            .map(|character| render_character(character, locale)),
    ) {
        clauses.push(fill(locale.characters, "{list}", &list));
    }

    clauses.push(labelled(locale.storyline_label, inputs.synopsis()));
    clauses.push(labelled(locale.elements_label, inputs.elements()));
    clauses.push(labelled(locale.message_label, inputs.moral()));

    if let Some(tone) = inputs.tone() {
        clauses.push(render_tone(tone, locale));
    }

    if let Some(author) = none_if_blank(inputs.author_style()) {
        clauses.push(fill(locale.author_style, "{author}", author));
    }

    format!("{}\n\n{}", opening, clauses.join("\n"))
}

/// `Label: text`, or just `Label:` when the text is blank.
fn labelled(label: &str, text: &str) -> String {
    match none_if_blank(text) {
        Some(text) => format!("{}: {}", label, text),
        None => format!("{}:", label),
    }
}

/// Join rendered entries, or `None` when nothing rendered.
fn roster(entries: impl Iterator<Item = Option<String>>) -> Option<String> {
    let rendered: Vec<String> = entries.flatten().collect();
    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join(ROSTER_SEPARATOR))
    }
}

fn render_listener(listener: &Listener) -> Option<String> {
    render_entry(
        none_if_blank(&listener.name),
        none_if_blank(&listener.description).map(str::to_string).into_iter().collect(),
    )
}

fn render_character(character: &StoryCharacter, locale: &PromptLocale) -> Option<String> {
    let mut details = Vec::new();
    if let Some(age) = none_if_blank(&character.age) {
        details.push(fill(locale.age, "{age}", age));
    }
    details.extend(
        [&character.gender, &character.description, &character.quirks]
            .into_iter()
            .filter_map(|field| none_if_blank(field))
            .map(str::to_string),
    );

    render_entry(none_if_blank(&character.name), details)
}

/// `name (details)`, `name`, or bare details.
fn render_entry(name: Option<&str>, details: Vec<String>) -> Option<String> {
    let details = if details.is_empty() {
        None
    } else {
        Some(details.join(ROSTER_SEPARATOR))
    };

    match (name, details) {
        (Some(name), Some(details)) => Some(format!("{} ({})", name, details)),
        (Some(name), None) => Some(name.to_string()),
        (None, Some(details)) => Some(details),
        (None, None) => None,
    }
}

fn render_tone(tone: &ToneSliders, locale: &PromptLocale) -> String {
    let levels: Vec<String> = tone
        .iter()
        .map(|(dimension, level)| {
            format!(
                "{}: {}/{}",
                locale.dimension_name(dimension),
                level,
                MAX_TONE_LEVEL
            )
        })
        .collect();
    format!("{}: {}", locale.tone_label, levels.join(ROSTER_SEPARATOR))
}
