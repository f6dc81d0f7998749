//! End-to-end shopping flows: catalog, cart, add-to-cart, checkout, review.

#![allow(clippy::unwrap_used)]

use nowapp_core::{ProductId, StoreId};
use nowapp_frontend::handlers::add_to_cart::AddToCartOutcome;
use nowapp_frontend::handlers::checkout::CheckoutOutcome;
use nowapp_frontend::handlers::review::ReviewOutcome;
use nowapp_frontend::handlers::{AddToCartButtons, CheckoutControl, ControlState, ReviewPanel, Tone};
use nowapp_frontend::views::cart::EMPTY_CART_MESSAGE;
use nowapp_frontend::views::{CartPage, Catalog};
use nowapp_frontend::widgets::{FilterBar, StoreFilter};
use nowapp_integration_tests::{
    INSUFFICIENT_FUNDS_DETAIL, OUT_OF_STOCK_DETAIL, StubBackend, logged_in_session,
};

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_catalog_loads_once_and_filters_locally() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();

    let catalog = Catalog::load(&session, &backend.client()).await.unwrap();

    assert_eq!(catalog.all().len(), 3);
    assert_eq!(backend.controls.requests(), vec!["GET /api/products"]);

    let mut bar = FilterBar::new(catalog.stores());
    bar.select(Some(&StoreId::from("store_green_market")));
    assert_eq!(catalog.grid(bar.active()).len(), 2);

    bar.select(None);
    assert_eq!(catalog.grid(bar.active()).len(), 3);

    // Filtering never refetched.
    assert_eq!(backend.controls.request_count(), 1);
}

#[tokio::test]
async fn test_product_cards_carry_formatted_fields() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();

    let catalog = Catalog::load(&session, &backend.client()).await.unwrap();
    let grid = catalog.grid(&StoreFilter::All);
    let first = grid.first().unwrap();

    assert_eq!(first.name, "Avocados");
    assert_eq!(first.price, "S/ 7.50");
    assert_eq!(first.seller, "Green Market");
    assert_eq!(first.image_url.as_deref(), Some("http://img/1.png"));
}

// =============================================================================
// Cart Page
// =============================================================================

#[tokio::test]
async fn test_cart_page_renders_items_and_totals() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();

    let page = CartPage::load(&session, &backend.client()).await.unwrap();

    let CartPage::Items(view) = page else {
        panic!("expected itemized panel");
    };
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines.first().unwrap().line_total, "S/ 15.00");
    assert_eq!(view.total, "S/ 15.00");
}

#[tokio::test]
async fn test_missing_cart_shows_empty_panel() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    backend.controls.set_empty_cart();

    let page = CartPage::load(&session, &backend.client()).await.unwrap();

    assert!(page.is_empty());
    assert_eq!(page.to_string(), EMPTY_CART_MESSAGE);
}

// =============================================================================
// Add To Cart
// =============================================================================

#[tokio::test]
async fn test_add_to_cart_success_restores_button() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    let client = backend.client();
    let mut buttons = AddToCartButtons::new();
    let p1 = ProductId::from("p1");

    let outcome = buttons.add(&session, &client, &p1).await;

    assert!(matches!(outcome, AddToCartOutcome::Added));
    let button = buttons.button(&p1).unwrap();
    assert_eq!(button.state(), ControlState::Idle);
    assert!(button.is_enabled());
}

#[tokio::test]
async fn test_out_of_stock_reverts_button_and_leaves_others_idle() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    let client = backend.client();
    backend.controls.mark_out_of_stock("p2");

    let mut buttons = AddToCartButtons::new();
    let p1 = ProductId::from("p1");
    let p2 = ProductId::from("p2");
    buttons.button_mut(&p1);

    let outcome = buttons.add(&session, &client, &p2).await;

    assert!(matches!(
        outcome,
        AddToCartOutcome::Failed { message } if message == OUT_OF_STOCK_DETAIL
    ));
    // The failed button reverted to idle after the display delay.
    let failed = buttons.button(&p2).unwrap();
    assert_eq!(failed.state(), ControlState::Idle);
    assert!(failed.is_enabled());
    // The other product's button never moved.
    let other = buttons.button(&p1).unwrap();
    assert_eq!(other.state(), ControlState::Idle);
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn test_checkout_confirms_order_and_retires_button() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    let mut control = CheckoutControl::new();

    let outcome = control.submit(&session, &backend.client()).await;

    let CheckoutOutcome::Navigate { order_number, .. } = outcome else {
        panic!("expected order confirmation");
    };
    assert_eq!(order_number.as_str(), "NOW-0001");
    assert!(control.button.is_hidden());

    let message = control.message.unwrap();
    assert_eq!(message.tone, Tone::Success);
    assert_eq!(message.text, "¡Compra exitosa! Pedido #NOW-0001");
}

#[tokio::test]
async fn test_rejected_order_reenables_button_with_server_reason() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    backend.controls.reject_orders();
    let mut control = CheckoutControl::new();

    let outcome = control.submit(&session, &backend.client()).await;

    assert!(matches!(
        outcome,
        CheckoutOutcome::Failed { message } if message == INSUFFICIENT_FUNDS_DETAIL
    ));
    assert!(control.button.is_enabled());
    assert!(!control.button.is_hidden());
    assert_eq!(control.message.unwrap().tone, Tone::Error);
}

// =============================================================================
// Review
// =============================================================================

#[tokio::test]
async fn test_review_submission_thanks_and_closes_overlay() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    let mut panel = ReviewPanel::new();
    panel.overlay.open();
    panel.rating.commit(9).unwrap();

    let outcome = panel.submit(&session, &backend.client(), "muy buena").await;

    assert!(matches!(outcome, ReviewOutcome::Submitted));
    assert!(panel.is_submitted());
    assert!(!panel.overlay.is_open());
    assert_eq!(panel.message.unwrap().tone, Tone::Success);
}

#[tokio::test]
async fn test_review_without_score_issues_no_request() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    let mut panel = ReviewPanel::new();
    panel.overlay.open();
    panel.rating.hover(7);

    let outcome = panel.submit(&session, &backend.client(), "").await;

    assert!(matches!(outcome, ReviewOutcome::ValidationFailed { .. }));
    assert_eq!(backend.controls.request_count(), 0);
    assert!(panel.overlay.is_open());
}
