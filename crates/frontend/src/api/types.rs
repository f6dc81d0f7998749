//! Request and response payloads for the backend REST API.
//!
//! Field names follow the wire format exactly; the backend mixes Spanish
//! (`nombre`, `origen`, `monto`) and English (`account_number`, `store_id`)
//! names, so structs rename to consistent English on the Rust side.

use nowapp_core::{AccessToken, AccountNumber, Money, OrderNumber, ProductId, Score, StoreId};
use serde::{Deserialize, Serialize};

/// Successful response from `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// The bearer credential to persist for subsequent pages.
    pub access_token: AccessToken,
}

/// Error body attached to non-2xx responses (`HTTPException` shape).
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}

/// Response from `GET /api/cart`.
///
/// `exists == false` means no cart document; the `cart` key is then absent.
/// A cart with zero items and a missing cart render identically, which the
/// backend relies on.
#[derive(Debug, Deserialize)]
pub struct CartResponse {
    pub exists: bool,
    #[serde(default)]
    pub cart: Option<Cart>,
}

/// Server-computed cart snapshot. Never mutated client-side.
#[derive(Debug, Clone, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotals_by_store: Vec<StoreSubtotal>,
    pub total_price: Money,
}

/// One cart line.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub store_id: StoreId,
    pub name: String,
    pub quantity: u32,
    pub price_per_unit: Money,
}

/// Per-store subtotal computed by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSubtotal {
    pub store_id: StoreId,
    pub subtotal: Money,
}

/// Successful response from `POST /api/orders`.
#[derive(Debug, Deserialize)]
pub struct OrderPlaced {
    pub order_number: OrderNumber,
}

/// Response from `GET /api/me/info`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountInfo {
    #[serde(rename = "nombre")]
    pub given_name: String,
    #[serde(rename = "apellido")]
    pub family_name: String,
    pub account_number: AccountNumber,
    pub balance: Money,
}

/// Response from `GET /api/me/movements`.
#[derive(Debug, Deserialize)]
pub struct MovementsResponse {
    pub movements: Vec<Movement>,
}

/// A historical transfer involving the viewer's account.
///
/// Direction is not stored; it is derived by comparing `origin` with the
/// viewer's own account number.
#[derive(Debug, Clone, Deserialize)]
pub struct Movement {
    #[serde(rename = "origen")]
    pub origin: AccountNumber,
    #[serde(rename = "destino")]
    pub destination: AccountNumber,
    #[serde(rename = "monto")]
    pub amount: Money,
}

/// Catalog entry from `GET /api/products`.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub store_id: StoreId,
}

/// Body for `POST /api/cart/items`.
#[derive(Debug, Serialize)]
pub struct AddCartItemRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Body for `POST /api/reviews`.
#[derive(Debug, Serialize)]
pub struct ReviewRequest {
    pub score: Score,
    pub comment: String,
}

/// Body for `POST /api/transfers`.
#[derive(Debug, Serialize)]
pub struct TransferRequest {
    #[serde(rename = "cuenta_origen")]
    pub origin: AccountNumber,
    #[serde(rename = "cuenta_destino")]
    pub destination: AccountNumber,
    #[serde(rename = "monto")]
    pub amount: Money,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_response_without_cart_key() {
        let json = r#"{"status":"success","exists":false,"message":"El carrito está vacío."}"#;
        let response: CartResponse = serde_json::from_str(json).unwrap();
        assert!(!response.exists);
        assert!(response.cart.is_none());
    }

    #[test]
    fn test_cart_response_with_items() {
        let json = r#"{
            "status": "success",
            "exists": true,
            "cart": {
                "items": [{
                    "product_id": "p1",
                    "store_id": "store_green_market",
                    "name": "Avocados",
                    "quantity": 2,
                    "price_per_unit": 7.5
                }],
                "subtotals_by_store": [
                    {"store_id": "store_green_market", "subtotal": 15.0, "payout_account_number": "002-9"}
                ],
                "total_price": 15.0
            }
        }"#;
        let response: CartResponse = serde_json::from_str(json).unwrap();
        let cart = response.cart.unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.subtotals_by_store.len(), 1);
        assert_eq!(cart.total_price.to_string(), "S/ 15.00");
    }

    #[test]
    fn test_account_info_spanish_field_names() {
        let json = r#"{"nombre":"Ana","apellido":"Torres","account_number":"001-1","balance":2500.75}"#;
        let info: AccountInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.given_name, "Ana");
        assert_eq!(info.family_name, "Torres");
        assert_eq!(info.balance.to_string(), "S/ 2,500.75");
    }

    #[test]
    fn test_movement_wire_names() {
        let json = r#"{"id": 1, "origen":"001-1","destino":"001-2","monto":150.0,"fecha":"2024-01-01T00:00:00"}"#;
        let movement: Movement = serde_json::from_str(json).unwrap();
        assert_eq!(movement.origin.as_str(), "001-1");
        assert_eq!(movement.destination.as_str(), "001-2");
    }

    #[test]
    fn test_transfer_request_wire_names() {
        let request = TransferRequest {
            origin: "001-1".into(),
            destination: "001-2".into(),
            amount: Money::new(rust_decimal::Decimal::new(5000, 2)),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("cuenta_origen").is_some());
        assert!(json.get("cuenta_destino").is_some());
        assert!(json.get("monto").is_some());
    }

    #[test]
    fn test_product_mongo_id_field() {
        let json = r#"{"_id":"abc123","name":"Keyboard","price":99.9,"image_urls":["http://img/1.png"],"store_id":"store_tech_plaza"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "abc123");
        assert_eq!(product.store_id.label(), "Tech Plaza");
    }
}
