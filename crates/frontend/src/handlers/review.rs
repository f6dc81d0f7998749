//! Review overlay handler.
//!
//! The overlay holds the ten-star selector and a free-text comment. A
//! submission without a committed score is rejected before anything goes on
//! the wire. A successful submission replaces the form with a thank-you note
//! and auto-closes the overlay after a fixed delay.

use super::{StatusMessage, timing};
use crate::api::{ApiClient, ApiError};
use crate::session::{Redirect, Session};
use crate::widgets::{ReviewOverlay, StarRating};

/// Validation message when submitting with no star committed.
pub const MISSING_SCORE_MESSAGE: &str = "Por favor, selecciona una puntuación.";

const THANK_YOU_MESSAGE: &str = "¡Gracias por tu opinión!";

/// Result of a review submission.
#[derive(Debug)]
pub enum ReviewOutcome {
    /// Review accepted; the overlay showed the thank-you note and closed.
    Submitted,
    /// No score was committed; no request was issued.
    ValidationFailed { message: String },
    /// The server refused; the form stays open for another attempt.
    Failed { message: String },
    /// The session was rejected mid-action.
    SessionLost(Redirect),
}

/// The review overlay with its star selector and message area.
#[derive(Debug, Clone, Default)]
pub struct ReviewPanel {
    pub overlay: ReviewOverlay,
    pub rating: StarRating,
    pub message: Option<StatusMessage>,
    submitted: bool,
}

impl ReviewPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the form was already replaced by the thank-you note.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Handle a submit with the typed comment.
    ///
    /// Runs the full cycle on success: thank-you note, fixed delay, close.
    pub async fn submit(
        &mut self,
        session: &Session,
        client: &ApiClient,
        comment: &str,
    ) -> ReviewOutcome {
        self.message = None;

        let Some(score) = self.rating.committed() else {
            self.message = Some(StatusMessage::error(MISSING_SCORE_MESSAGE));
            return ReviewOutcome::ValidationFailed {
                message: MISSING_SCORE_MESSAGE.to_string(),
            };
        };

        let token = match session.require() {
            Ok(token) => token,
            Err(redirect) => return ReviewOutcome::SessionLost(redirect),
        };

        match client.submit_review(&token, score, comment).await {
            Ok(()) => {
                self.submitted = true;
                self.message = Some(StatusMessage::success(THANK_YOU_MESSAGE));
                tokio::time::sleep(timing::REVIEW_CLOSE_DELAY).await;
                self.overlay.close();
                ReviewOutcome::Submitted
            }
            Err(ApiError::SessionInvalid) => ReviewOutcome::SessionLost(session.invalidate()),
            Err(e) => {
                let message = e.user_message();
                self.message = Some(StatusMessage::error(message.clone()));
                ReviewOutcome::Failed { message }
            }
        }
    }
}
