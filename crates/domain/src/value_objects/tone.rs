//! Tone sliders
//!
//! Six named dimensions, each an integer level from 0 to [`MAX_TONE_LEVEL`].
//! Levels not set explicitly stay at [`DEFAULT_TONE_LEVEL`].

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Highest level a tone slider can take.
pub const MAX_TONE_LEVEL: u8 = 5;

/// Level a slider has when the caller leaves it untouched.
pub const DEFAULT_TONE_LEVEL: u8 = 3;

/// A named tone dimension.
///
/// Declaration order is the order dimensions appear in the compiled prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneDimension {
    Suspense,
    Humor,
    Absurdity,
    Educational,
    Adventurousness,
    Inspiration,
}

impl ToneDimension {
    pub const ALL: [ToneDimension; 6] = [
        ToneDimension::Suspense,
        ToneDimension::Humor,
        ToneDimension::Absurdity,
        ToneDimension::Educational,
        ToneDimension::Adventurousness,
        ToneDimension::Inspiration,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Suspense => 0,
            Self::Humor => 1,
            Self::Absurdity => 2,
            Self::Educational => 3,
            Self::Adventurousness => 4,
            Self::Inspiration => 5,
        }
    }
}

/// Levels for every [`ToneDimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToneSliders {
    levels: [u8; 6],
}

impl Default for ToneSliders {
    fn default() -> Self {
        Self {
            levels: [DEFAULT_TONE_LEVEL; 6],
        }
    }
}

impl ToneSliders {
    /// All dimensions at [`DEFAULT_TONE_LEVEL`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `dimension` set to `level`.
    ///
    /// Fails with [`DomainError::InvalidInput`] when `level` exceeds
    /// [`MAX_TONE_LEVEL`].
    pub fn with_level(mut self, dimension: ToneDimension, level: u8) -> Result<Self, DomainError> {
        if level > MAX_TONE_LEVEL {
            return Err(DomainError::invalid_input(format!(
                "tone level for {:?} must be between 0 and {}, got {}",
                dimension, MAX_TONE_LEVEL, level
            )));
        }
        self.levels[dimension.index()] = level;
        Ok(self)
    }

    pub fn level(&self, dimension: ToneDimension) -> u8 {
        self.levels[dimension.index()]
    }

    /// Dimensions with their levels, in prompt order.
    pub fn iter(&self) -> impl Iterator<Item = (ToneDimension, u8)> + '_ {
        ToneDimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.level(dimension)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_three_everywhere() {
        let sliders = ToneSliders::new();
        assert!(sliders.iter().all(|(_, level)| level == DEFAULT_TONE_LEVEL));
    }

    #[test]
    fn test_with_level_only_touches_one_dimension() {
        let sliders = ToneSliders::new()
            .with_level(ToneDimension::Humor, 5)
            .unwrap()
            .with_level(ToneDimension::Suspense, 0)
            .unwrap();

        assert_eq!(sliders.level(ToneDimension::Humor), 5);
        assert_eq!(sliders.level(ToneDimension::Suspense), 0);
        assert_eq!(sliders.level(ToneDimension::Inspiration), DEFAULT_TONE_LEVEL);
    }

    #[test]
    fn when_level_above_five_then_invalid_input() {
        let err = ToneSliders::new()
            .with_level(ToneDimension::Absurdity, 6)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_iter_follows_declaration_order() {
        let order: Vec<ToneDimension> = ToneSliders::new().iter().map(|(d, _)| d).collect();
        assert_eq!(order, ToneDimension::ALL.to_vec());
    }
}
