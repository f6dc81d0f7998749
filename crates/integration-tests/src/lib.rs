//! Integration-test support for the NowApp headless client.
//!
//! [`StubBackend`] is an in-process stand-in for the real backend: a small
//! `axum` router bound to an ephemeral port, serving the nine endpoints the
//! client consumes with canned demo data. Every incoming request is recorded
//! as `"METHOD /path"` so tests can assert not only on responses but on the
//! absence of traffic (a guarded page with no stored credential must issue
//! zero requests).
//!
//! Failure modes are toggled per test through [`BackendControls`]:
//! expired sessions (every authenticated endpoint answers 401), out-of-stock
//! products, rejected orders, and an empty cart.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::{Value, json};

use nowapp_frontend::FrontendConfig;
use nowapp_frontend::api::ApiClient;
use nowapp_frontend::session::{MemoryCredentialStore, Session};

/// The only credential the stub accepts.
pub const TEST_TOKEN: &str = "test-token-abc";
/// The only username the stub accepts.
pub const TEST_USER: &str = "ana";
/// The only password the stub accepts.
pub const TEST_PASSWORD: &str = "secret";

/// Detail string for a rejected order.
pub const INSUFFICIENT_FUNDS_DETAIL: &str = "Saldo insuficiente para completar la compra.";
/// Detail string for an out-of-stock add-to-cart.
pub const OUT_OF_STOCK_DETAIL: &str = "Out of stock";

/// Per-test switches and the request log.
#[derive(Default)]
pub struct BackendControls {
    requests: Mutex<Vec<String>>,
    expired: AtomicBool,
    reject_orders: AtomicBool,
    empty_cart: AtomicBool,
    out_of_stock: Mutex<HashSet<String>>,
}

impl BackendControls {
    fn record(&self, method: &str, path: &str) {
        lock(&self.requests).push(format!("{method} {path}"));
    }

    /// All requests seen so far, as `"METHOD /path"`.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        lock(&self.requests).clone()
    }

    /// Number of requests seen so far.
    #[must_use]
    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Make every authenticated endpoint answer 401 from now on.
    pub fn expire_sessions(&self) {
        self.expired.store(true, Ordering::SeqCst);
    }

    /// Make `POST /api/orders` answer 400 with the insufficient-funds detail.
    pub fn reject_orders(&self) {
        self.reject_orders.store(true, Ordering::SeqCst);
    }

    /// Make `GET /api/cart` report that no cart exists.
    pub fn set_empty_cart(&self) {
        self.empty_cart.store(true, Ordering::SeqCst);
    }

    /// Make `POST /api/cart/items` reject this product as out of stock.
    pub fn mark_out_of_stock(&self, product_id: &str) {
        lock(&self.out_of_stock).insert(product_id.to_string());
    }
}

// A poisoned lock in test support means a test already failed; keep going
// with the inner value so the original assertion surfaces.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// The running stub backend.
pub struct StubBackend {
    /// Origin to point `NOWAPP_API_BASE_URL` at.
    pub base_url: String,
    /// Switches and request log shared with the router.
    pub controls: Arc<BackendControls>,
}

impl StubBackend {
    /// Bind to an ephemeral localhost port and start serving.
    ///
    /// # Panics
    ///
    /// Panics when the listener cannot be bound; tests cannot proceed
    /// without it.
    pub async fn start() -> Self {
        let controls = Arc::new(BackendControls::default());

        let app = Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/me/info", get(account_info))
            .route("/api/me/movements", get(movements))
            .route("/api/products", get(products))
            .route("/api/cart", get(cart))
            .route("/api/cart/items", post(add_cart_item))
            .route("/api/orders", post(place_order))
            .route("/api/transfers", post(transfer))
            .route("/api/reviews", post(submit_review))
            .with_state(Arc::clone(&controls));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub backend listener");
        let addr = listener.local_addr().expect("stub backend local addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            controls,
        }
    }

    /// An API client pointed at this stub.
    ///
    /// # Panics
    ///
    /// Panics when the client cannot be built.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        let config = FrontendConfig::from_parts(&self.base_url, None, ".test-credential")
            .expect("stub backend config");
        ApiClient::new(&config).expect("stub backend client")
    }
}

/// A session with no stored credential.
#[must_use]
pub fn logged_out_session() -> Session {
    Session::new(Arc::new(MemoryCredentialStore::new()))
}

/// A session already holding the stub's accepted credential.
#[must_use]
pub fn logged_in_session() -> Session {
    Session::new(Arc::new(MemoryCredentialStore::with_token(TEST_TOKEN)))
}

// =============================================================================
// Handlers
// =============================================================================

fn error_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

fn authorized(controls: &BackendControls, headers: &HeaderMap) -> bool {
    if controls.expired.load(Ordering::SeqCst) {
        return false;
    }
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == format!("Bearer {TEST_TOKEN}"))
}

fn unauthorized() -> Response {
    error_response(
        StatusCode::UNAUTHORIZED,
        "No se pudieron validar las credenciales",
    )
}

#[derive(Deserialize)]
struct LoginBody {
    username: String,
    password: String,
}

async fn login(
    State(controls): State<Arc<BackendControls>>,
    Form(body): Form<LoginBody>,
) -> Response {
    controls.record("POST", "/api/auth/login");
    if body.username == TEST_USER && body.password == TEST_PASSWORD {
        Json(json!({ "access_token": TEST_TOKEN, "token_type": "bearer" })).into_response()
    } else {
        error_response(
            StatusCode::UNAUTHORIZED,
            "Nombre de usuario o contraseña incorrectos",
        )
    }
}

async fn account_info(
    State(controls): State<Arc<BackendControls>>,
    headers: HeaderMap,
) -> Response {
    controls.record("GET", "/api/me/info");
    if !authorized(&controls, &headers) {
        return unauthorized();
    }
    Json(json!({
        "nombre": "Ana",
        "apellido": "Torres",
        "account_number": "001-1",
        "balance": 2500.75
    }))
    .into_response()
}

async fn movements(State(controls): State<Arc<BackendControls>>, headers: HeaderMap) -> Response {
    controls.record("GET", "/api/me/movements");
    if !authorized(&controls, &headers) {
        return unauthorized();
    }
    Json(json!({
        "movements": [
            { "origen": "001-1", "destino": "001-2", "monto": 150.0 },
            { "origen": "001-9", "destino": "001-1", "monto": 80.5 }
        ]
    }))
    .into_response()
}

async fn products(State(controls): State<Arc<BackendControls>>) -> Response {
    controls.record("GET", "/api/products");
    Json(json!([
        {
            "_id": "p1",
            "name": "Avocados",
            "price": 7.5,
            "image_urls": ["http://img/1.png"],
            "store_id": "store_green_market"
        },
        {
            "_id": "p2",
            "name": "Keyboard",
            "price": 99.9,
            "image_urls": [],
            "store_id": "store_tech_plaza"
        },
        {
            "_id": "p3",
            "name": "Honey",
            "price": 18.0,
            "image_urls": ["http://img/3.png"],
            "store_id": "store_green_market"
        }
    ]))
    .into_response()
}

async fn cart(State(controls): State<Arc<BackendControls>>, headers: HeaderMap) -> Response {
    controls.record("GET", "/api/cart");
    if !authorized(&controls, &headers) {
        return unauthorized();
    }
    if controls.empty_cart.load(Ordering::SeqCst) {
        return Json(json!({
            "status": "success",
            "exists": false,
            "message": "El carrito está vacío."
        }))
        .into_response();
    }
    Json(json!({
        "status": "success",
        "exists": true,
        "cart": {
            "items": [
                {
                    "product_id": "p1",
                    "store_id": "store_green_market",
                    "name": "Avocados",
                    "quantity": 2,
                    "price_per_unit": 7.5
                }
            ],
            "subtotals_by_store": [
                { "store_id": "store_green_market", "subtotal": 15.0 }
            ],
            "total_price": 15.0
        }
    }))
    .into_response()
}

async fn add_cart_item(
    State(controls): State<Arc<BackendControls>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    controls.record("POST", "/api/cart/items");
    if !authorized(&controls, &headers) {
        return unauthorized();
    }
    let product_id = body
        .get("product_id")
        .and_then(Value::as_str)
        .unwrap_or_default();
    if lock(&controls.out_of_stock).contains(product_id) {
        return error_response(StatusCode::BAD_REQUEST, OUT_OF_STOCK_DETAIL);
    }
    Json(json!({ "status": "success" })).into_response()
}

async fn place_order(State(controls): State<Arc<BackendControls>>, headers: HeaderMap) -> Response {
    controls.record("POST", "/api/orders");
    if !authorized(&controls, &headers) {
        return unauthorized();
    }
    if controls.reject_orders.load(Ordering::SeqCst) {
        return error_response(StatusCode::BAD_REQUEST, INSUFFICIENT_FUNDS_DETAIL);
    }
    Json(json!({ "order_number": "NOW-0001" })).into_response()
}

async fn transfer(
    State(controls): State<Arc<BackendControls>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    controls.record("POST", "/api/transfers");
    if !authorized(&controls, &headers) {
        return unauthorized();
    }
    let amount = body.get("monto").and_then(Value::as_f64).unwrap_or(0.0);
    if amount > 2500.75 {
        return error_response(StatusCode::BAD_REQUEST, "Saldo insuficiente.");
    }
    Json(json!({ "status": "success" })).into_response()
}

async fn submit_review(
    State(controls): State<Arc<BackendControls>>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> Response {
    controls.record("POST", "/api/reviews");
    if !authorized(&controls, &headers) {
        return unauthorized();
    }
    Json(json!({ "status": "success" })).into_response()
}
