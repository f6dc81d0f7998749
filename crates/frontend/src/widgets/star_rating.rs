//! Ten-star rating selector.
//!
//! Hovering highlights up to the hovered star; leaving reverts the highlight
//! to the committed selection; clicking commits. The committed "selected"
//! state is independent of the hover highlight.

use nowapp_core::{Score, ScoreError};

/// Number of selectable stars.
pub const STAR_COUNT: u8 = Score::MAX;

/// State of the star rating widget.
#[derive(Debug, Clone, Default)]
pub struct StarRating {
    committed: Option<Score>,
    hover: Option<u8>,
}

impl StarRating {
    /// Fresh widget with nothing committed and no hover.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the star at `position` (1-based).
    ///
    /// Out-of-range positions are ignored, like a hover outside the stars.
    pub fn hover(&mut self, position: u8) {
        if (1..=STAR_COUNT).contains(&position) {
            self.hover = Some(position);
        }
    }

    /// Pointer left the stars; highlight reverts to the committed score.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Click on the star at `position`: commit the selection.
    ///
    /// # Errors
    ///
    /// Returns an error for positions outside 1-10; the committed selection
    /// is left unchanged.
    pub fn commit(&mut self, position: u8) -> Result<Score, ScoreError> {
        let score = Score::new(position)?;
        self.committed = Some(score);
        Ok(score)
    }

    /// The committed score, if one was selected.
    #[must_use]
    pub const fn committed(&self) -> Option<Score> {
        self.committed
    }

    /// How many stars are currently highlighted (hover wins over committed).
    #[must_use]
    pub fn highlighted(&self) -> u8 {
        self.hover
            .unwrap_or_else(|| self.committed.map_or(0, Score::get))
    }

    /// Whether the star at `position` (1-based) is highlighted right now.
    #[must_use]
    pub fn is_lit(&self, position: u8) -> bool {
        position >= 1 && position <= self.highlighted()
    }

    /// Whether the star at `position` carries the persistent "selected"
    /// state, independent of hover.
    #[must_use]
    pub fn is_selected(&self, position: u8) -> bool {
        position >= 1 && position <= self.committed.map_or(0, Score::get)
    }
}
