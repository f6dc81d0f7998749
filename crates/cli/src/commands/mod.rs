//! Command implementations, one module per page group.

pub mod auth;
pub mod bank;
pub mod shop;

use std::sync::Arc;

use nowapp_frontend::api::ApiClient;
use nowapp_frontend::session::{FileCredentialStore, PageError, Session};
use nowapp_frontend::{AppError, FrontendConfig};

/// Shown when a command needs a session and none is stored.
pub(crate) const NO_SESSION_MESSAGE: &str = "No hay sesión activa. Ejecute `nowapp login`.";

/// Shown when the server rejects the stored credential mid-command.
pub(crate) const SESSION_LOST_MESSAGE: &str =
    "Sesión inválida. Por favor, inicie sesión de nuevo.";

type CommandError = Box<dyn std::error::Error>;

/// Build the session and API client every command starts from.
pub(crate) fn context() -> Result<(Session, ApiClient), AppError> {
    let config = FrontendConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    let store = FileCredentialStore::new(config.credential_file.clone());
    Ok((Session::new(Arc::new(store)), client))
}

/// Flatten a page-load failure into a command error.
pub(crate) fn page_error(error: PageError) -> CommandError {
    match error {
        PageError::Redirect(_) => NO_SESSION_MESSAGE.into(),
        PageError::Unavailable(message) => message.into(),
    }
}
