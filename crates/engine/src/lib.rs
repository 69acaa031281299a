//! Storyteller Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Story generation orchestration
//! - `infrastructure/` - Configuration, provider port and its OpenAI-compatible adapter
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
