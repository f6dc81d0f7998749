//! Cart page view.
//!
//! The page shows exactly one of two panels: the empty-state message or the
//! itemized cart. "No cart document" and "cart with zero items" are the same
//! empty state - the backend treats them interchangeably and the client
//! preserves that conflation.

use nowapp_core::Money;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::api::types::{Cart, CartResponse};
use crate::session::{PageError, Session};

/// Empty-state panel text.
pub const EMPTY_CART_MESSAGE: &str = "Tu carrito está vacío.";

/// The cart page, with the two panels mutually exclusive by construction.
#[derive(Debug, Clone)]
pub enum CartPage {
    /// No cart, or a cart with zero items.
    Empty,
    /// At least one line item.
    Items(CartView),
}

/// Itemized cart panel.
#[derive(Debug, Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotals: Vec<SubtotalView>,
    pub total: String,
}

/// One rendered cart line.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub name: String,
    pub seller: String,
    pub quantity: u32,
    /// Quantity times unit price, formatted as currency.
    pub line_total: String,
}

/// One rendered per-store subtotal row.
#[derive(Debug, Clone)]
pub struct SubtotalView {
    pub seller: String,
    pub amount: String,
}

impl CartPage {
    /// Guard the page, fetch the cart snapshot, and render it.
    ///
    /// # Errors
    ///
    /// Redirects on a missing or rejected session; inline message otherwise.
    pub async fn load(session: &Session, client: &ApiClient) -> Result<Self, PageError> {
        let token = session.require()?;
        let response = client
            .cart(&token)
            .await
            .map_err(|e| session.classify_failure(&e))?;
        Ok(Self::from_response(&response))
    }

    /// Render a fetched snapshot into the page model.
    #[must_use]
    pub fn from_response(response: &CartResponse) -> Self {
        match &response.cart {
            Some(cart) if response.exists && !cart.items.is_empty() => {
                Self::Items(CartView::from(cart))
            }
            _ => Self::Empty,
        }
    }

    /// Whether the empty-state panel is the one shown.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let lines = cart
            .items
            .iter()
            .map(|item| {
                let line_total =
                    Money::new(item.price_per_unit.amount() * Decimal::from(item.quantity));
                CartLineView {
                    name: item.name.clone(),
                    seller: item.store_id.label(),
                    quantity: item.quantity,
                    line_total: line_total.to_string(),
                }
            })
            .collect();

        let subtotals = cart
            .subtotals_by_store
            .iter()
            .map(|subtotal| SubtotalView {
                seller: subtotal.store_id.label(),
                amount: subtotal.subtotal.to_string(),
            })
            .collect();

        Self {
            lines,
            subtotals,
            total: cart.total_price.to_string(),
        }
    }
}

impl std::fmt::Display for CartPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_CART_MESSAGE),
            Self::Items(view) => view.fmt(f),
        }
    }
}

impl std::fmt::Display for CartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(
                f,
                "{}  (Vendido por: {})  x{}  {}",
                line.name, line.seller, line.quantity, line.line_total
            )?;
        }
        for subtotal in &self.subtotals {
            writeln!(f, "Pago a {}: {}", subtotal.seller, subtotal.amount)?;
        }
        write!(f, "Total: {}", self.total)
    }
}
