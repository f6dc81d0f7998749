//! Review overlay state.
//!
//! Opens on the trigger, closes on the explicit close control, on a click on
//! the dimmed backdrop outside the panel, or automatically after a
//! successful submission.

/// Open/closed state of the review overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewOverlay {
    open: bool,
}

impl ReviewOverlay {
    /// New overlay, closed.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Trigger clicked.
    pub const fn open(&mut self) {
        self.open = true;
    }

    /// Close control clicked (or auto-close after submission).
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere on the page; closes only when it hit the
    /// dimmed backdrop itself, not the panel.
    pub const fn backdrop_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.open = false;
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}
