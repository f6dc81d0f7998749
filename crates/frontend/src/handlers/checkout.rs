//! Checkout handler.
//!
//! One click: disable the button, show the progress label, POST the order.
//! Success shows the order confirmation, permanently hides the button, and
//! navigates home after a fixed delay. Failure shows the server reason and
//! re-enables the button for retry.

use nowapp_core::OrderNumber;

use super::{ActionButton, StatusMessage, timing};
use crate::api::ApiClient;
use crate::session::{Redirect, Session};

const CHECKOUT_LABEL: &str = "Finalizar Compra y Pagar";
const CHECKOUT_PROGRESS_LABEL: &str = "Procesando pago...";

/// Checkout button plus its inline message area.
#[derive(Debug, Clone)]
pub struct CheckoutControl {
    pub button: ActionButton,
    pub message: Option<StatusMessage>,
}

impl Default for CheckoutControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a checkout click.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// Order placed; the caller should perform the navigation.
    Navigate {
        order_number: OrderNumber,
        redirect: Redirect,
    },
    /// The order was rejected; the button is enabled again.
    Failed { message: String },
    /// The session was rejected mid-action.
    SessionLost(Redirect),
}

impl CheckoutControl {
    #[must_use]
    pub fn new() -> Self {
        Self {
            button: ActionButton::new(CHECKOUT_LABEL),
            message: None,
        }
    }

    /// Handle a click on the checkout button.
    pub async fn submit(&mut self, session: &Session, client: &ApiClient) -> CheckoutOutcome {
        let token = match session.require() {
            Ok(token) => token,
            Err(redirect) => return CheckoutOutcome::SessionLost(redirect),
        };

        self.button.begin(CHECKOUT_PROGRESS_LABEL);
        self.message = None;

        match client.place_order(&token).await {
            Ok(order) => {
                self.message = Some(StatusMessage::success(format!(
                    "¡Compra exitosa! Pedido #{}",
                    order.order_number
                )));
                // The button never comes back after a successful purchase.
                self.button.succeed(CHECKOUT_LABEL);
                self.button.hide();

                tokio::time::sleep(timing::CHECKOUT_REDIRECT_DELAY).await;
                CheckoutOutcome::Navigate {
                    order_number: order.order_number,
                    redirect: Redirect::to_home(),
                }
            }
            Err(e) => {
                if matches!(e, crate::api::ApiError::SessionInvalid) {
                    return CheckoutOutcome::SessionLost(session.invalidate());
                }
                let message = e.user_message();
                self.message = Some(StatusMessage::error(message.clone()));
                self.button.reenable();
                CheckoutOutcome::Failed { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The success and failure paths need a live endpoint and are covered by
    // the integration tests; the guard path is self-contained.

    #[tokio::test]
    async fn test_missing_session_redirects_without_touching_button() {
        let session = Session::new(std::sync::Arc::new(
            crate::session::MemoryCredentialStore::new(),
        ));
        #[allow(clippy::unwrap_used)]
        let config =
            crate::config::FrontendConfig::from_parts("http://127.0.0.1:1", None, ".cred")
                .unwrap();
        #[allow(clippy::unwrap_used)]
        let client = ApiClient::new(&config).unwrap();

        let mut control = CheckoutControl::new();
        let outcome = control.submit(&session, &client).await;

        assert!(matches!(outcome, CheckoutOutcome::SessionLost(r) if r == Redirect::to_login()));
        assert_eq!(control.button.label(), CHECKOUT_LABEL);
        assert!(control.button.is_enabled());
    }
}
