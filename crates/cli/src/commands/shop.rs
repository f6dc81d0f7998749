//! Shopping commands: catalog, cart, checkout, add-to-cart, review.

use nowapp_core::{ProductId, StoreId};
use nowapp_frontend::AppError;
use nowapp_frontend::handlers::add_to_cart::AddToCartOutcome;
use nowapp_frontend::handlers::checkout::CheckoutOutcome;
use nowapp_frontend::handlers::review::ReviewOutcome;
use nowapp_frontend::handlers::{AddToCartButtons, CheckoutControl, ReviewPanel};
use nowapp_frontend::views::{Catalog, CartPage};
use nowapp_frontend::widgets::FilterBar;

/// Browse the catalog, optionally narrowed to one store.
///
/// # Errors
///
/// Returns an error when no session is stored or the backend fails.
pub async fn browse(store: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;
    let catalog = Catalog::load(&session, &client)
        .await
        .map_err(super::page_error)?;

    let mut bar = FilterBar::new(catalog.stores());
    let store_id = store.map(StoreId::from);
    bar.select(store_id.as_ref());

    let row: Vec<String> = bar
        .options()
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if bar.is_active(i) {
                format!("[{}]", option.label())
            } else {
                format!(" {} ", option.label())
            }
        })
        .collect();
    println!("{}", row.join("  "));

    for card in catalog.grid(bar.active()) {
        println!("{card}");
    }
    Ok(())
}

/// Show the current cart, or the empty-state message.
///
/// # Errors
///
/// Returns an error when no session is stored or the backend fails.
pub async fn cart() -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;
    let page = CartPage::load(&session, &client)
        .await
        .map_err(super::page_error)?;
    println!("{page}");
    Ok(())
}

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns an error when the server refuses (e.g. out of stock) or the
/// session is lost.
pub async fn add(product_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;
    let mut buttons = AddToCartButtons::new();

    match buttons
        .add(&session, &client, &ProductId::from(product_id))
        .await
    {
        AddToCartOutcome::Added => {
            println!("Producto añadido al carrito.");
            Ok(())
        }
        AddToCartOutcome::Failed { message } => Err(message.into()),
        AddToCartOutcome::SessionLost(_) => Err(super::NO_SESSION_MESSAGE.into()),
    }
}

/// Check out the current cart.
///
/// # Errors
///
/// Returns an error when the order is rejected or the session is lost.
pub async fn checkout() -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;
    let mut control = CheckoutControl::new();

    match control.submit(&session, &client).await {
        CheckoutOutcome::Navigate { order_number, .. } => {
            println!("¡Compra exitosa! Pedido #{order_number}");
            Ok(())
        }
        CheckoutOutcome::Failed { message } => Err(message.into()),
        CheckoutOutcome::SessionLost(_) => Err(super::NO_SESSION_MESSAGE.into()),
    }
}

/// Submit an app review with a 1-10 star score.
///
/// # Errors
///
/// Returns an error for an out-of-range score, a rejected review, or a
/// lost session.
pub async fn review(score: u8, comment: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;
    let mut panel = ReviewPanel::new();
    panel.overlay.open();
    panel
        .rating
        .commit(score)
        .map_err(|e| AppError::ValidationFailed(e.to_string()))?;

    match panel.submit(&session, &client, comment).await {
        ReviewOutcome::Submitted => {
            if let Some(message) = panel.message {
                println!("{}", message.text);
            }
            Ok(())
        }
        ReviewOutcome::ValidationFailed { message } | ReviewOutcome::Failed { message } => {
            Err(message.into())
        }
        ReviewOutcome::SessionLost(_) => Err(super::NO_SESSION_MESSAGE.into()),
    }
}
