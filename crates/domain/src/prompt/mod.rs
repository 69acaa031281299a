//! Prompt compilation: creative inputs -> provider messages.

mod compiler;
mod locale;

pub use compiler::{compile_prompt, CompiledPrompt};
pub use locale::PromptLocale;
