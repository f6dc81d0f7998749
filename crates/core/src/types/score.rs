//! Review score newtype.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error validating a review score.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Score was outside the 1-10 range.
    #[error("score must be between {min} and {max}, got {0}", min = Score::MIN, max = Score::MAX)]
    OutOfRange(u8),
}

/// A user-submitted review score between 1 and 10 inclusive.
///
/// Zero is not a valid score - "no score selected" is `Option::<Score>::None`
/// on the rating widget, and submission is blocked until one is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Lowest selectable score.
    pub const MIN: u8 = 1;
    /// Highest selectable score (the widget renders ten stars).
    pub const MAX: u8 = 10;

    /// Validate and wrap a raw score.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::OutOfRange`] when outside 1-10.
    pub const fn new(value: u8) -> Result<Self, ScoreError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ScoreError::OutOfRange(value))
        }
    }

    /// Get the raw score value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
