//! Account dashboard view.
//!
//! Loads account info first, then movements - the second call does not
//! depend on the first on the wire, but direction classification needs the
//! viewer's account number, so the fetches stay sequential.

use nowapp_core::AccountNumber;

use crate::api::ApiClient;
use crate::api::types::{AccountInfo, Movement};
use crate::session::{PageError, Session};

/// Placeholder line shown when there are no movements.
pub const NO_MOVEMENTS_PLACEHOLDER: &str = "No se han encontrado movimientos.";

/// Rendered dashboard.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Welcome banner with given and family name.
    pub welcome: String,
    /// Balance formatted as currency.
    pub balance: String,
    pub movements: MovementList,
}

/// Movement list panel: a placeholder line or the rendered entries.
#[derive(Debug, Clone)]
pub enum MovementList {
    Empty,
    Entries(Vec<MovementView>),
}

/// Styling tone of a movement amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementTone {
    /// Money arrived; positive amount.
    Deposit,
    /// Money left the viewer's account; negative amount.
    Withdrawal,
}

/// One rendered movement line.
#[derive(Debug, Clone)]
pub struct MovementView {
    /// Description naming the counter-party.
    pub description: String,
    /// Signed formatted amount, e.g. `- S/ 150.00`.
    pub amount_label: String,
    pub tone: MovementTone,
}

impl MovementView {
    /// Classify a movement against the viewer's own account number.
    ///
    /// The direction is derived, never stored: when the viewer's account is
    /// the origin it is a withdrawal, otherwise a deposit.
    #[must_use]
    pub fn classify(movement: &Movement, viewer: &AccountNumber) -> Self {
        if movement.origin == *viewer {
            Self {
                description: format!("Transferencia a {}", movement.destination),
                amount_label: format!("- {}", movement.amount),
                tone: MovementTone::Withdrawal,
            }
        } else {
            Self {
                description: format!("Transferencia de {}", movement.origin),
                amount_label: format!("+ {}", movement.amount),
                tone: MovementTone::Deposit,
            }
        }
    }
}

impl DashboardView {
    /// Guard the page, fetch account info then movements, and render.
    ///
    /// # Errors
    ///
    /// Redirects on a missing or rejected session; inline message otherwise.
    pub async fn load(session: &Session, client: &ApiClient) -> Result<Self, PageError> {
        let token = session.require()?;

        let info = client
            .account_info(&token)
            .await
            .map_err(|e| session.classify_failure(&e))?;
        let movements = client
            .movements(&token)
            .await
            .map_err(|e| session.classify_failure(&e))?;

        Ok(Self::render(&info, &movements.movements))
    }

    /// Build the view from fetched payloads.
    #[must_use]
    pub fn render(info: &AccountInfo, movements: &[Movement]) -> Self {
        let entries: Vec<MovementView> = movements
            .iter()
            .map(|m| MovementView::classify(m, &info.account_number))
            .collect();

        Self {
            welcome: format!("¡Bienvenido, {} {}!", info.given_name, info.family_name),
            balance: info.balance.to_string(),
            movements: if entries.is_empty() {
                MovementList::Empty
            } else {
                MovementList::Entries(entries)
            },
        }
    }
}

impl std::fmt::Display for DashboardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.welcome)?;
        writeln!(f, "Saldo: {}", self.balance)?;
        match &self.movements {
            MovementList::Empty => write!(f, "{NO_MOVEMENTS_PLACEHOLDER}"),
            MovementList::Entries(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}  {}", entry.description, entry.amount_label)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn info() -> AccountInfo {
        serde_json::from_str(
            r#"{"nombre":"Ana","apellido":"Torres","account_number":"001-1","balance":2500.75}"#,
        )
        .unwrap()
    }

    fn movement(origin: &str, destination: &str, amount: f64) -> Movement {
        serde_json::from_str(&format!(
            r#"{{"origen":"{origin}","destino":"{destination}","monto":{amount}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_welcome_and_balance() {
        let view = DashboardView::render(&info(), &[]);
        assert_eq!(view.welcome, "¡Bienvenido, Ana Torres!");
        assert_eq!(view.balance, "S/ 2,500.75");
    }

    #[test]
    fn test_empty_movements_placeholder() {
        let view = DashboardView::render(&info(), &[]);
        assert!(matches!(view.movements, MovementList::Empty));
        assert!(view.to_string().contains(NO_MOVEMENTS_PLACEHOLDER));
    }

    #[test]
    fn test_withdrawal_when_viewer_is_origin() {
        let entry = MovementView::classify(&movement("001-1", "001-2", 150.0), &"001-1".into());
        assert_eq!(entry.tone, MovementTone::Withdrawal);
        assert_eq!(entry.amount_label, "- S/ 150.00");
        assert_eq!(entry.description, "Transferencia a 001-2");
    }

    #[test]
    fn test_deposit_when_viewer_is_destination() {
        let entry = MovementView::classify(&movement("001-9", "001-1", 80.5), &"001-1".into());
        assert_eq!(entry.tone, MovementTone::Deposit);
        assert_eq!(entry.amount_label, "+ S/ 80.50");
        assert_eq!(entry.description, "Transferencia de 001-9");
    }

    #[test]
    fn test_entries_render_in_order() {
        let movements = vec![
            movement("001-1", "001-2", 10.0),
            movement("001-3", "001-1", 20.0),
        ];
        let view = DashboardView::render(&info(), &movements);
        let MovementList::Entries(entries) = &view.movements else {
            panic!("expected entries");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries.first().unwrap().tone, MovementTone::Withdrawal);
        assert_eq!(entries.get(1).unwrap().tone, MovementTone::Deposit);
    }
}
