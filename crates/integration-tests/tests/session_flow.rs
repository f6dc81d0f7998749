//! End-to-end session lifecycle against the stub backend.
//!
//! Covers the credential round trip (login stores it, pages read it, 401
//! tears it down) and the guard property that a page with no stored
//! credential issues no network traffic at all.

#![allow(clippy::unwrap_used)]

use nowapp_frontend::handlers::LoginForm;
use nowapp_frontend::handlers::login::LoginOutcome;
use nowapp_frontend::session::{Page, PageError, Redirect};
use nowapp_frontend::views::{CartPage, Catalog, DashboardView};
use nowapp_integration_tests::{StubBackend, TEST_PASSWORD, TEST_TOKEN, TEST_USER, logged_in_session, logged_out_session};

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_stores_credential_and_navigates_home() {
    let backend = StubBackend::start().await;
    let session = logged_out_session();

    let form = LoginForm {
        username: TEST_USER.to_string(),
        password: TEST_PASSWORD.to_string(),
    };
    let outcome = form.submit(&session, &backend.client()).await;

    assert!(matches!(outcome, LoginOutcome::Navigate(r) if r.to == Page::Home));
    assert_eq!(session.require().unwrap().expose(), TEST_TOKEN);
    assert_eq!(backend.controls.requests(), vec!["POST /api/auth/login"]);
}

#[tokio::test]
async fn test_rejected_credentials_leave_session_empty() {
    let backend = StubBackend::start().await;
    let session = logged_out_session();

    let form = LoginForm {
        username: TEST_USER.to_string(),
        password: "wrong".to_string(),
    };
    let outcome = form.submit(&session, &backend.client()).await;

    assert!(matches!(outcome, LoginOutcome::Failed { .. }));
    assert!(session.require().is_err());
}

// =============================================================================
// Page Guard
// =============================================================================

#[tokio::test]
async fn test_guarded_pages_issue_no_requests_without_credential() {
    let backend = StubBackend::start().await;
    let session = logged_out_session();
    let client = backend.client();

    assert!(matches!(
        DashboardView::load(&session, &client).await,
        Err(PageError::Redirect(r)) if r == Redirect::to_login()
    ));
    assert!(matches!(
        CartPage::load(&session, &client).await,
        Err(PageError::Redirect(_))
    ));
    assert!(matches!(
        Catalog::load(&session, &client).await,
        Err(PageError::Redirect(_))
    ));

    assert_eq!(backend.controls.request_count(), 0);
}

// =============================================================================
// Session Invalidation
// =============================================================================

#[tokio::test]
async fn test_server_side_401_clears_credential_and_redirects() {
    let backend = StubBackend::start().await;
    let session = logged_in_session();
    backend.controls.expire_sessions();

    let result = DashboardView::load(&session, &backend.client()).await;

    assert!(matches!(
        result,
        Err(PageError::Redirect(r)) if r == Redirect::to_login()
    ));
    // The credential is gone; the next page entry redirects before any fetch.
    assert!(session.require().is_err());
}

#[tokio::test]
async fn test_invalidate_is_an_explicit_logout() {
    let session = logged_in_session();
    assert!(session.require().is_ok());

    let redirect = session.invalidate();

    assert_eq!(redirect, Redirect::to_login());
    assert!(session.require().is_err());
}
