//! Per-request generation lifecycle
//!
//! `Idle -> Compiling -> AwaitingProvider -> {Succeeded | Failed}`.
//! Both outcomes are terminal and nothing re-enters `AwaitingProvider`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStage {
    Idle,
    Compiling,
    AwaitingProvider,
    Succeeded,
    Failed,
}

impl GenerationStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    pub fn can_transition_to(&self, next: GenerationStage) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Compiling)
                | (Self::Compiling, Self::AwaitingProvider)
                | (Self::AwaitingProvider, Self::Succeeded)
                | (Self::AwaitingProvider, Self::Failed)
        )
    }

    /// Move to `next`, rejecting any edge not in the lifecycle.
    pub fn transition_to(self, next: GenerationStage) -> Result<GenerationStage, DomainError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(DomainError::invalid_state_transition(self, next))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Compiling => "compiling",
            Self::AwaitingProvider => "awaiting_provider",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
