//! Session guard.
//!
//! Every protected page starts the same way: read the credential from
//! storage, redirect to login if absent, and perform no further work. When a
//! protected fetch later reports 401, the credential is cleared and the same
//! redirect happens. There is no refresh or renewal - expiry is handled
//! purely by reacting to a rejected request.

pub mod store;

use std::sync::Arc;

use nowapp_core::AccessToken;
use thiserror::Error;

use crate::api::ApiError;
pub use store::{CredentialStore, FileCredentialStore, MemoryCredentialStore, StoreError};

/// Navigable pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Login entry point (`login.html`).
    Login,
    /// Account dashboard (`index.html`).
    Home,
    /// Product catalog (`tienda.html`).
    Shop,
    /// Cart and checkout (`carrito.html`).
    Cart,
    /// Transfer form (`transfer.html`).
    Transfer,
}

/// A navigation the caller must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub to: Page,
}

impl Redirect {
    /// Redirect to the login entry point.
    #[must_use]
    pub const fn to_login() -> Self {
        Self { to: Page::Login }
    }

    /// Redirect to the main view.
    #[must_use]
    pub const fn to_home() -> Self {
        Self { to: Page::Home }
    }
}

/// Why a protected page could not be shown.
#[derive(Debug, Error)]
pub enum PageError {
    /// The viewer must be sent elsewhere (always the login page).
    #[error("redirect to login required")]
    Redirect(Redirect),

    /// The page stays up with an inline message; the user may retry.
    #[error("{0}")]
    Unavailable(String),
}

impl From<Redirect> for PageError {
    fn from(redirect: Redirect) -> Self {
        Self::Redirect(redirect)
    }
}

/// Process-wide session state with explicit init (login) and teardown
/// (logout or invalidation), passed to every page and handler.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    /// Create a session backed by the given credential store.
    #[must_use]
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Page-entry guard: the stored credential, or the login redirect.
    ///
    /// When this returns `Err`, the caller must navigate away without
    /// issuing any network call. An unreadable store is treated the same as
    /// an absent credential.
    ///
    /// # Errors
    ///
    /// Returns the login redirect when no credential is stored.
    pub fn require(&self) -> Result<AccessToken, Redirect> {
        match self.store.load() {
            Ok(Some(token)) => Ok(token),
            Ok(None) => {
                tracing::debug!("no stored credential, redirecting to login");
                Err(Redirect::to_login())
            }
            Err(e) => {
                tracing::warn!(error = %e, "credential store unreadable, treating as logged out");
                Err(Redirect::to_login())
            }
        }
    }

    /// Store a freshly issued credential (successful login).
    ///
    /// # Errors
    ///
    /// Returns an error when the credential cannot be persisted.
    pub fn establish(&self, token: &AccessToken) -> Result<(), StoreError> {
        self.store.save(token)
    }

    /// Clear the credential and redirect to login.
    ///
    /// Used both for explicit logout and for server-side invalidation. A
    /// failing clear is logged but still redirects - the session is gone
    /// either way.
    pub fn invalidate(&self) -> Redirect {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "failed to clear stored credential");
        }
        Redirect::to_login()
    }

    /// Convert an API failure into the page-level reaction: 401 tears the
    /// session down and redirects, anything else becomes an inline message.
    #[must_use]
    pub fn classify_failure(&self, error: &ApiError) -> PageError {
        match error {
            ApiError::SessionInvalid => PageError::Redirect(self.invalidate()),
            other => PageError::Unavailable(other.user_message()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session_with(store: MemoryCredentialStore) -> Session {
        Session::new(Arc::new(store))
    }

    #[test]
    fn test_require_redirects_without_credential() {
        let session = session_with(MemoryCredentialStore::new());
        assert_eq!(session.require().unwrap_err(), Redirect::to_login());
    }

    #[test]
    fn test_require_returns_stored_credential() {
        let session = session_with(MemoryCredentialStore::with_token("abc"));
        assert_eq!(session.require().unwrap().expose(), "abc");
    }

    #[test]
    fn test_invalidate_clears_and_redirects() {
        let session = session_with(MemoryCredentialStore::with_token("abc"));
        assert_eq!(session.invalidate(), Redirect::to_login());
        assert!(session.require().is_err());
    }

    #[test]
    fn test_establish_then_require() {
        let session = session_with(MemoryCredentialStore::new());
        session.establish(&AccessToken::new("fresh")).unwrap();
        assert_eq!(session.require().unwrap().expose(), "fresh");
    }

    #[test]
    fn test_classify_401_invalidates() {
        let session = session_with(MemoryCredentialStore::with_token("abc"));
        let reaction = session.classify_failure(&ApiError::SessionInvalid);
        assert!(matches!(reaction, PageError::Redirect(r) if r == Redirect::to_login()));
        // Credential is gone regardless of which endpoint produced the 401.
        assert!(session.require().is_err());
    }

    #[test]
    fn test_classify_other_failure_keeps_session() {
        let session = session_with(MemoryCredentialStore::with_token("abc"));
        let reaction = session.classify_failure(&ApiError::RequestFailed {
            status: 500,
            detail: Some("boom".to_string()),
        });
        assert!(matches!(reaction, PageError::Unavailable(m) if m == "boom"));
        assert!(session.require().is_ok());
    }
}
