//! Authenticated fetch client for the NowApp backend API.
//!
//! All nine endpoints the pages consume go through [`ApiClient`]. Every
//! response is classified the same way:
//!
//! - `401` → [`ApiError::SessionInvalid`] - the session guard clears the
//!   credential and redirects to login
//! - other non-2xx → [`ApiError::RequestFailed`] carrying the server's
//!   `detail` string when present
//! - 2xx → parsed JSON body
//!
//! No automatic retry and no request de-duplication; the only timeout is the
//! explicit one from [`FrontendConfig`].

pub mod types;

use nowapp_core::{AccessToken, ProductId, Score};
use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::FrontendConfig;
use types::{
    AccountInfo, AddCartItemRequest, CartResponse, ErrorBody, LoginResponse, MovementsResponse,
    OrderPlaced, Product, ReviewRequest, TransferRequest,
};

/// Fallback shown when the server provides no error detail.
pub const GENERIC_REQUEST_ERROR: &str = "La operación no se pudo completar.";

/// Errors from talking to the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the bearer credential (HTTP 401).
    #[error("session invalid: the server rejected the credential")]
    SessionInvalid,

    /// The server answered with a non-2xx, non-401 status.
    #[error("request failed with status {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    RequestFailed {
        status: u16,
        /// Server-supplied `detail` string, when parseable.
        detail: Option<String>,
    },

    /// Transport-level failure (connection refused, timeout, ...).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body that did not match the expected shape.
    #[error("json parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// Message suitable for inline display next to the failed control.
    ///
    /// Surfaces the server's `detail` when present, otherwise a generic
    /// fallback; never exposes transport internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::SessionInvalid => {
                "Sesión inválida. Por favor, inicie sesión de nuevo.".to_string()
            }
            Self::RequestFailed {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Self::RequestFailed { detail: None, .. } | Self::Http(_) | Self::Parse(_) => {
                GENERIC_REQUEST_ERROR.to_string()
            }
        }
    }
}

/// Client for the NowApp backend REST API.
///
/// Cheaply cloneable; the underlying `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &FrontendConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Classify a response, extracting the parsed body on success.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let text = Self::classify(response).await?;
        serde_json::from_str(&text).map_err(ApiError::Parse)
    }

    /// Classify a response, discarding the body on success.
    async fn parse_unit(response: reqwest::Response) -> Result<(), ApiError> {
        Self::classify(response).await.map(|_| ())
    }

    async fn classify(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("backend rejected credential with 401");
            return Err(ApiError::SessionInvalid);
        }

        let text = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.detail);
            tracing::error!(
                status = %status,
                detail = detail.as_deref().unwrap_or("(none)"),
                "backend returned non-success status"
            );
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(text)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&AccessToken>,
    ) -> Result<T, ApiError> {
        let mut request = self.http.get(self.endpoint(path));
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }
        Self::parse(request.send().await?).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        token: &AccessToken,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let mut request = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(token.expose());
        if let Some(body) = body {
            request = request.json(body);
        }
        Self::parse(request.send().await?).await
    }

    async fn post_unit<B: Serialize>(
        &self,
        path: &str,
        token: &AccessToken,
        body: &B,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(token.expose())
            .json(body)
            .send()
            .await?;
        Self::parse_unit(response).await
    }

    // =========================================================================
    // Endpoints
    // =========================================================================

    /// `POST /api/auth/login` - form-encoded credentials, no bearer header.
    ///
    /// # Errors
    ///
    /// `RequestFailed` with the server `detail` on bad credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;
        let login: LoginResponse = Self::parse(response).await?;
        Ok(login.access_token)
    }

    /// `GET /api/cart` - the viewer's cart snapshot.
    ///
    /// # Errors
    ///
    /// `SessionInvalid` on 401, `RequestFailed` otherwise.
    pub async fn cart(&self, token: &AccessToken) -> Result<CartResponse, ApiError> {
        self.get_json("/api/cart", Some(token)).await
    }

    /// `POST /api/orders` - checkout the current cart. No body.
    ///
    /// # Errors
    ///
    /// `RequestFailed` carries reasons like "Saldo insuficiente".
    pub async fn place_order(&self, token: &AccessToken) -> Result<OrderPlaced, ApiError> {
        self.post_json::<(), _>("/api/orders", token, None).await
    }

    /// `GET /api/me/info` - account holder name, number, and balance.
    ///
    /// # Errors
    ///
    /// `SessionInvalid` on 401, `RequestFailed` otherwise.
    pub async fn account_info(&self, token: &AccessToken) -> Result<AccountInfo, ApiError> {
        self.get_json("/api/me/info", Some(token)).await
    }

    /// `GET /api/me/movements` - past transfers involving the viewer.
    ///
    /// # Errors
    ///
    /// `SessionInvalid` on 401, `RequestFailed` otherwise.
    pub async fn movements(&self, token: &AccessToken) -> Result<MovementsResponse, ApiError> {
        self.get_json("/api/me/movements", Some(token)).await
    }

    /// `GET /api/products` - the full catalog.
    ///
    /// Issued without the bearer header, as the original page does, even
    /// though the catalog page itself is session-guarded.
    ///
    /// # Errors
    ///
    /// `RequestFailed` on backend failure.
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get_json("/api/products", None).await
    }

    /// `POST /api/cart/items` - add a product to the cart.
    ///
    /// # Errors
    ///
    /// `RequestFailed` carries reasons like "Out of stock".
    pub async fn add_cart_item(
        &self,
        token: &AccessToken,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), ApiError> {
        let body = AddCartItemRequest {
            product_id,
            quantity,
        };
        self.post_unit("/api/cart/items", token, &body).await
    }

    /// `POST /api/reviews` - submit a score and comment.
    ///
    /// # Errors
    ///
    /// `SessionInvalid` on 401, `RequestFailed` otherwise.
    pub async fn submit_review(
        &self,
        token: &AccessToken,
        score: Score,
        comment: &str,
    ) -> Result<(), ApiError> {
        let body = ReviewRequest {
            score,
            comment: comment.to_string(),
        };
        self.post_unit("/api/reviews", token, &body).await
    }

    /// `POST /api/transfers` - move money between accounts.
    ///
    /// # Errors
    ///
    /// `RequestFailed` carries reasons like insufficient funds.
    pub async fn transfer(
        &self,
        token: &AccessToken,
        request: &TransferRequest,
    ) -> Result<(), ApiError> {
        self.post_unit("/api/transfers", token, request).await
    }
}
