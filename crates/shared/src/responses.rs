//! Response bodies for the story generation API.

use serde::{Deserialize, Serialize};

/// Body returned by `POST /api/generate`.
///
/// Serializes as `{"story": ...}` on success and `{"error": ...}` otherwise;
/// a response never carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateStoryResponse {
    Story { story: String },
    Error { error: String },
}

impl GenerateStoryResponse {
    pub fn story(story: impl Into<String>) -> Self {
        Self::Story {
            story: story.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}
