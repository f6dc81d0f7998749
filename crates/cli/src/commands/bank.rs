//! Banking commands: dashboard and transfer.

use nowapp_frontend::handlers::TransferControl;
use nowapp_frontend::handlers::transfer::TransferOutcome;
use nowapp_frontend::views::DashboardView;

/// Show the account dashboard: welcome banner, balance, movements.
///
/// # Errors
///
/// Returns an error when no session is stored or the backend fails.
pub async fn dashboard() -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;
    let view = DashboardView::load(&session, &client)
        .await
        .map_err(super::page_error)?;
    println!("{view}");
    Ok(())
}

/// Transfer money from the viewer's account.
///
/// The origin account comes from the viewer's account info, exactly as the
/// prefilled form field did.
///
/// # Errors
///
/// Returns an error on validation failure, a rejected transfer, or a lost
/// session.
pub async fn transfer(to: &str, amount: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (session, client) = super::context()?;
    let mut control = TransferControl::load(&session, &client)
        .await
        .map_err(super::page_error)?;

    tracing::debug!(origin = %control.origin(), "origin account prefilled");

    match control.submit(&session, &client, to, amount).await {
        TransferOutcome::Navigate(_) => {
            if let Some(message) = control.message {
                println!("{}", message.text);
            }
            Ok(())
        }
        TransferOutcome::ValidationFailed { message } | TransferOutcome::Failed { message } => {
            Err(message.into())
        }
        TransferOutcome::SessionLost(_) => Err(super::SESSION_LOST_MESSAGE.into()),
    }
}
