//! Session commands: login and logout.

use nowapp_frontend::handlers::LoginForm;
use nowapp_frontend::handlers::login::LoginOutcome;

/// Log in and persist the issued credential.
///
/// # Errors
///
/// Returns an error when validation fails or the server rejects the
/// credentials.
pub async fn login(username: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;

    let form = LoginForm {
        username: username.to_string(),
        password: password.to_string(),
    };

    match form.submit(&session, &client).await {
        LoginOutcome::Navigate(_) => {
            println!("Sesión iniciada.");
            Ok(())
        }
        LoginOutcome::ValidationFailed { message } | LoginOutcome::Failed { message } => {
            Err(message.into())
        }
    }
}

/// Discard the stored credential. Logging out twice is fine.
///
/// # Errors
///
/// Returns an error when configuration cannot be loaded.
pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let (session, _client) = super::context()?;
    session.invalidate();
    println!("Sesión cerrada.");
    Ok(())
}
