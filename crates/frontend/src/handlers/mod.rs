//! Form and action handlers.
//!
//! Every action button follows the same state machine:
//!
//! ```text
//! idle -> submitting -> succeeded | failed
//! ```
//!
//! Failure reverts to idle after a fixed display delay; success either
//! navigates away or permanently retires the control. State is keyed per
//! control (the add-to-cart buttons are keyed by product id), so a failure
//! on one control never affects another.

pub mod add_to_cart;
pub mod checkout;
pub mod login;
pub mod review;
pub mod transfer;

pub use add_to_cart::AddToCartButtons;
pub use checkout::CheckoutControl;
pub use login::LoginForm;
pub use review::ReviewPanel;
pub use transfer::TransferControl;

/// Fixed display delays, matching the original page scripts.
pub mod timing {
    use std::time::Duration;

    /// Add-to-cart success glyph display time before the label restores.
    pub const ADD_TO_CART_SUCCESS_REVERT: Duration = Duration::from_millis(1500);
    /// Add-to-cart error glyph display time before the label restores.
    pub const ADD_TO_CART_FAILURE_REVERT: Duration = Duration::from_millis(2000);
    /// Delay between order confirmation and navigating home.
    pub const CHECKOUT_REDIRECT_DELAY: Duration = Duration::from_millis(3000);
    /// Delay between transfer confirmation and navigating home.
    pub const TRANSFER_REDIRECT_DELAY: Duration = Duration::from_millis(2000);
    /// Delay before the review overlay auto-closes after a submission.
    pub const REVIEW_CLOSE_DELAY: Duration = Duration::from_millis(2000);
}

/// Lifecycle state of one action control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Tone of an inline status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Inline message shown next to a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: Tone,
}

impl StatusMessage {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }
}

/// One action button: label, enabled/hidden flags, and lifecycle state.
#[derive(Debug, Clone)]
pub struct ActionButton {
    label: String,
    original_label: String,
    enabled: bool,
    hidden: bool,
    state: ControlState,
}

impl ActionButton {
    /// New enabled button in the idle state.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original_label: label.clone(),
            label,
            enabled: true,
            hidden: false,
            state: ControlState::Idle,
        }
    }

    /// Enter the submitting state: disabled, progress label shown.
    pub fn begin(&mut self, progress_label: impl Into<String>) {
        self.label = progress_label.into();
        self.enabled = false;
        self.state = ControlState::Submitting;
    }

    /// Enter the succeeded state with the given label, still disabled.
    pub fn succeed(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.enabled = false;
        self.state = ControlState::Succeeded;
    }

    /// Enter the failed state with the given label, still disabled.
    pub fn fail(&mut self, label: impl Into<String>) {
        self.label = label.into();
        self.enabled = false;
        self.state = ControlState::Failed;
    }

    /// Revert to idle: original label, enabled again.
    pub fn restore(&mut self) {
        self.label.clone_from(&self.original_label);
        self.enabled = true;
        self.state = ControlState::Idle;
    }

    /// Re-enable in place, keeping the original label (failure path of
    /// controls that do not show a glyph).
    pub fn reenable(&mut self) {
        self.label.clone_from(&self.original_label);
        self.enabled = true;
        self.state = ControlState::Failed;
    }

    /// Permanently retire the control (successful checkout hides its
    /// button; a successful transfer disables its submit).
    pub const fn disable(&mut self) {
        self.enabled = false;
    }

    /// Hide the control entirely.
    pub const fn hide(&mut self) {
        self.hidden = true;
        self.enabled = false;
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub const fn state(&self) -> ControlState {
        self.state
    }
}
