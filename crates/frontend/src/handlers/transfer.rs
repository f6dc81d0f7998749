//! Transfer form handler.
//!
//! The origin account is prefilled from the viewer's account info when the
//! page loads; the viewer only types the destination and the amount. A
//! successful transfer confirms inline, retires the submit button, and
//! navigates home after a fixed delay. A rejected transfer (insufficient
//! funds, unknown destination) leaves the form editable with the server's
//! reason.

use std::str::FromStr;

use nowapp_core::{AccountNumber, Money};
use rust_decimal::Decimal;

use super::{ActionButton, StatusMessage, timing};
use crate::api::types::TransferRequest;
use crate::api::{ApiClient, ApiError};
use crate::session::{PageError, Redirect, Session};

const TRANSFER_LABEL: &str = "Realizar Transferencia";
const TRANSFER_PROGRESS_LABEL: &str = "Procesando...";
const TRANSFER_SUCCESS_MESSAGE: &str = "¡Transferencia realizada con éxito!";

/// Validation message for a missing destination or a bad amount.
pub const INVALID_TRANSFER_MESSAGE: &str =
    "Por favor, ingrese una cuenta de destino y un monto válido.";

/// The transfer page: prefilled origin plus the submit control.
#[derive(Debug, Clone)]
pub struct TransferControl {
    origin: AccountNumber,
    pub button: ActionButton,
    pub message: Option<StatusMessage>,
}

/// Result of a transfer submission.
#[derive(Debug)]
pub enum TransferOutcome {
    /// Transfer accepted; the caller should perform the navigation.
    Navigate(Redirect),
    /// A field was missing or malformed; no request was issued.
    ValidationFailed { message: String },
    /// The server refused; the form stays editable.
    Failed { message: String },
    /// The session was rejected mid-action.
    SessionLost(Redirect),
}

impl TransferControl {
    /// Guard the page and prefill the origin account from account info.
    ///
    /// # Errors
    ///
    /// Redirects on a missing or rejected session; inline message on any
    /// other fetch failure.
    pub async fn load(session: &Session, client: &ApiClient) -> Result<Self, PageError> {
        let token = session.require()?;
        let info = client
            .account_info(&token)
            .await
            .map_err(|e| session.classify_failure(&e))?;
        Ok(Self::with_origin(info.account_number))
    }

    /// Build the control with an already-known origin account.
    #[must_use]
    pub fn with_origin(origin: AccountNumber) -> Self {
        Self {
            origin,
            button: ActionButton::new(TRANSFER_LABEL),
            message: None,
        }
    }

    /// The prefilled, read-only origin account.
    #[must_use]
    pub const fn origin(&self) -> &AccountNumber {
        &self.origin
    }

    /// Handle a submit with the typed destination and amount.
    pub async fn submit(
        &mut self,
        session: &Session,
        client: &ApiClient,
        destination: &str,
        amount: &str,
    ) -> TransferOutcome {
        self.message = None;

        let Some(request) = self.build_request(destination, amount) else {
            return TransferOutcome::ValidationFailed {
                message: INVALID_TRANSFER_MESSAGE.to_string(),
            };
        };

        let token = match session.require() {
            Ok(token) => token,
            Err(redirect) => return TransferOutcome::SessionLost(redirect),
        };

        self.button.begin(TRANSFER_PROGRESS_LABEL);

        match client.transfer(&token, &request).await {
            Ok(()) => {
                self.message = Some(StatusMessage::success(TRANSFER_SUCCESS_MESSAGE));
                // The submit never comes back after a successful transfer.
                self.button.succeed(TRANSFER_LABEL);
                self.button.disable();

                tokio::time::sleep(timing::TRANSFER_REDIRECT_DELAY).await;
                TransferOutcome::Navigate(Redirect::to_home())
            }
            Err(ApiError::SessionInvalid) => TransferOutcome::SessionLost(session.invalidate()),
            Err(e) => {
                let message = e.user_message();
                self.message = Some(StatusMessage::error(message.clone()));
                self.button.reenable();
                TransferOutcome::Failed { message }
            }
        }
    }

    fn build_request(&self, destination: &str, amount: &str) -> Option<TransferRequest> {
        let destination = destination.trim();
        if destination.is_empty() {
            return None;
        }
        let amount = Decimal::from_str(amount.trim()).ok()?;
        if amount <= Decimal::ZERO {
            return None;
        }
        Some(TransferRequest {
            origin: self.origin.clone(),
            destination: AccountNumber::from(destination),
            amount: Money::new(amount),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> TransferControl {
        TransferControl::with_origin(AccountNumber::from("001-1"))
    }

    fn offline() -> (Session, ApiClient) {
        let session = Session::new(std::sync::Arc::new(
            crate::session::MemoryCredentialStore::with_token("abc"),
        ));
        #[allow(clippy::unwrap_used)]
        let config =
            crate::config::FrontendConfig::from_parts("http://127.0.0.1:1", None, ".cred")
                .unwrap();
        #[allow(clippy::unwrap_used)]
        let client = ApiClient::new(&config).unwrap();
        (session, client)
    }

    #[tokio::test]
    async fn test_empty_destination_blocks_submission() {
        let (session, client) = offline();
        let outcome = control().submit(&session, &client, "  ", "50.00").await;
        assert!(matches!(outcome, TransferOutcome::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn test_non_numeric_amount_blocks_submission() {
        let (session, client) = offline();
        let outcome = control().submit(&session, &client, "001-2", "cincuenta").await;
        assert!(matches!(outcome, TransferOutcome::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn test_zero_amount_blocks_submission() {
        let (session, client) = offline();
        let outcome = control().submit(&session, &client, "001-2", "0").await;
        assert!(matches!(outcome, TransferOutcome::ValidationFailed { .. }));
    }

    #[test]
    fn test_request_carries_prefilled_origin() {
        let request = control().build_request("001-2", "150.50");
        #[allow(clippy::unwrap_used)]
        let request = request.unwrap();
        assert_eq!(request.origin.as_str(), "001-1");
        assert_eq!(request.destination.as_str(), "001-2");
    }
}
