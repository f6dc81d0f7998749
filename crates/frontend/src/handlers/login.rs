//! Login form handler.
//!
//! Both fields are required client-side; nothing goes on the wire until
//! they are non-empty. Credentials are submitted form-encoded, not JSON.
//! Success stores the returned credential and navigates to the main view.

use crate::api::ApiClient;
use crate::session::{Redirect, Session};

/// Validation message for missing fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, ingrese usuario y contraseña.";

/// Collected login form input.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Result of a login attempt.
#[derive(Debug)]
pub enum LoginOutcome {
    /// Credential stored; navigate to the main view.
    Navigate(Redirect),
    /// A field was empty; no request was issued.
    ValidationFailed { message: String },
    /// The server rejected the credentials (or the request failed).
    Failed { message: String },
}

impl LoginForm {
    /// Submit the form.
    ///
    /// Mirrors the browser flow: prevent the page reload, validate, POST
    /// form-encoded, store the token, navigate home.
    pub async fn submit(&self, session: &Session, client: &ApiClient) -> LoginOutcome {
        if self.username.is_empty() || self.password.is_empty() {
            return LoginOutcome::ValidationFailed {
                message: MISSING_FIELDS_MESSAGE.to_string(),
            };
        }

        match client.login(&self.username, &self.password).await {
            Ok(token) => {
                if let Err(e) = session.establish(&token) {
                    tracing::error!(error = %e, "failed to persist credential after login");
                    return LoginOutcome::Failed {
                        message: "No se pudo guardar la sesión.".to_string(),
                    };
                }
                tracing::debug!("login succeeded, credential stored");
                LoginOutcome::Navigate(Redirect::to_home())
            }
            Err(e) => LoginOutcome::Failed {
                message: e.user_message(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Network paths are covered by the integration tests against the stub
    // backend; here only the no-network validation path is checked.

    fn offline_client() -> ApiClient {
        #[allow(clippy::unwrap_used)]
        let config =
            crate::config::FrontendConfig::from_parts("http://127.0.0.1:1", None, ".cred")
                .unwrap();
        #[allow(clippy::unwrap_used)]
        ApiClient::new(&config).unwrap()
    }

    fn offline_session() -> Session {
        Session::new(std::sync::Arc::new(
            crate::session::MemoryCredentialStore::new(),
        ))
    }

    #[tokio::test]
    async fn test_empty_username_blocks_submission() {
        let form = LoginForm {
            username: String::new(),
            password: "secret".to_string(),
        };
        let outcome = form.submit(&offline_session(), &offline_client()).await;
        assert!(matches!(
            outcome,
            LoginOutcome::ValidationFailed { message } if message == MISSING_FIELDS_MESSAGE
        ));
    }

    #[tokio::test]
    async fn test_empty_password_blocks_submission() {
        let form = LoginForm {
            username: "ana".to_string(),
            password: String::new(),
        };
        let outcome = form.submit(&offline_session(), &offline_client()).await;
        assert!(matches!(outcome, LoginOutcome::ValidationFailed { .. }));
    }
}
