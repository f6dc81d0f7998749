//! Type-safe identifier newtypes.
//!
//! All identifiers are opaque strings assigned by the backend. Newtypes keep
//! a product id from being passed where an account number is expected.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Catalog product identifier (the backend's `_id` field).
    ProductId
}

string_id! {
    /// Identifier of the catalog vendor owning a product or cart line.
    StoreId
}

string_id! {
    /// Bank account number, used to derive movement direction.
    AccountNumber
}

string_id! {
    /// Order number returned by a successful checkout.
    OrderNumber
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner() {
        let id = ProductId::new("prod-1");
        assert_eq!(id.to_string(), "prod-1");
        assert_eq!(id.as_str(), "prod-1");
    }

    #[test]
    fn test_account_number_equality() {
        let a = AccountNumber::from("001-123");
        let b = AccountNumber::new("001-123".to_string());
        assert_eq!(a, b);
    }
}
