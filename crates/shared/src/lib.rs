//! Storyteller Protocol - wire types for the story generation API
//!
//! - Request payload accepted by `POST /api/generate` (both the simple and
//!   the detailed form schema) and its translation into domain values
//! - Response bodies (`{story}` / `{error}`)
//!
//! # Design Principles
//!
//! 1. **No business logic** - data types, serialization, and boundary translation
//! 2. **Lenient optional fields** - absent or `null` optional fields are never an error

pub mod requests;
pub mod responses;

pub use requests::{CharacterData, GenerateStoryRequest, PersonData, ToneSlidersData};
pub use responses::GenerateStoryResponse;
