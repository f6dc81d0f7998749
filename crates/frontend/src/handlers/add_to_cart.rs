//! Add-to-cart handler.
//!
//! Button state is keyed by product id, so two overlapping clicks on
//! different cards stay independent: a failure on one product's button
//! never touches another's.

use std::collections::HashMap;

use nowapp_core::ProductId;

use super::{ActionButton, timing};
use crate::api::{ApiClient, ApiError};
use crate::session::{Redirect, Session};

const ADD_LABEL: &str = "Añadir al Carrito";
const ADD_PROGRESS_LABEL: &str = "Añadiendo...";
const ADD_SUCCESS_LABEL: &str = "¡Añadido! ✅";
const ADD_FAILURE_LABEL: &str = "Error ❌";

/// Quantity added per click, as in the original page.
const ADD_QUANTITY: u32 = 1;

/// Result of one add-to-cart click.
#[derive(Debug)]
pub enum AddToCartOutcome {
    /// Item added; the button showed the success glyph and restored.
    Added,
    /// The server refused; the button showed the error glyph and restored.
    Failed { message: String },
    /// The session was rejected mid-action.
    SessionLost(Redirect),
}

/// Per-product add-to-cart button registry.
#[derive(Debug, Default)]
pub struct AddToCartButtons {
    buttons: HashMap<ProductId, ActionButton>,
}

impl AddToCartButtons {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The button for a product, creating it in the idle state on first use.
    pub fn button_mut(&mut self, product_id: &ProductId) -> &mut ActionButton {
        self.buttons
            .entry(product_id.clone())
            .or_insert_with(|| ActionButton::new(ADD_LABEL))
    }

    /// Read-only access for rendering and assertions.
    #[must_use]
    pub fn button(&self, product_id: &ProductId) -> Option<&ActionButton> {
        self.buttons.get(product_id)
    }

    /// Handle a click on one product's add-to-cart button.
    ///
    /// Runs the full visual cycle: progress label while the request is in
    /// flight, then the success or error glyph, then the original label
    /// after the configured delay.
    pub async fn add(
        &mut self,
        session: &Session,
        client: &ApiClient,
        product_id: &ProductId,
    ) -> AddToCartOutcome {
        let token = match session.require() {
            Ok(token) => token,
            Err(redirect) => return AddToCartOutcome::SessionLost(redirect),
        };

        self.button_mut(product_id).begin(ADD_PROGRESS_LABEL);

        let result = client
            .add_cart_item(&token, product_id.clone(), ADD_QUANTITY)
            .await;

        match result {
            Ok(()) => {
                let button = self.button_mut(product_id);
                button.succeed(ADD_SUCCESS_LABEL);
                tokio::time::sleep(timing::ADD_TO_CART_SUCCESS_REVERT).await;
                self.button_mut(product_id).restore();
                AddToCartOutcome::Added
            }
            Err(ApiError::SessionInvalid) => AddToCartOutcome::SessionLost(session.invalidate()),
            Err(e) => {
                tracing::warn!(product = %product_id, error = %e, "add to cart failed");
                let message = e.user_message();
                self.button_mut(product_id).fail(ADD_FAILURE_LABEL);
                tokio::time::sleep(timing::ADD_TO_CART_FAILURE_REVERT).await;
                self.button_mut(product_id).restore();
                AddToCartOutcome::Failed { message }
            }
        }
    }
}
