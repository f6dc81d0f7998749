//! Product catalog view.
//!
//! The full collection is fetched once and retained; the filter buttons
//! re-render the grid from that retained copy without another fetch and
//! without mutating it.

use nowapp_core::{ProductId, StoreId};

use crate::api::ApiClient;
use crate::api::types::Product;
use crate::session::{PageError, Session};
use crate::widgets::StoreFilter;

/// One rendered product card.
#[derive(Debug, Clone)]
pub struct ProductCardView {
    /// Identifier tagged onto the add-to-cart control.
    pub product_id: ProductId,
    pub name: String,
    /// Price formatted as currency.
    pub price: String,
    /// Seller label, e.g. `Vendido por: Green Market`.
    pub seller: String,
    /// First image, when the product has any.
    pub image_url: Option<String>,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price.to_string(),
            seller: product.store_id.label(),
            image_url: product.image_urls.first().cloned(),
        }
    }
}

impl std::fmt::Display for ProductCardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {}  {}  (Vendido por: {})",
            self.product_id, self.name, self.price, self.seller
        )
    }
}

/// The catalog page: the retained full product collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Guard the page, then fetch the full catalog.
    ///
    /// The products endpoint itself is unauthenticated, but the page is
    /// still behind the session guard - no credential, no fetch.
    ///
    /// # Errors
    ///
    /// Redirects on a missing session; inline message on fetch failure.
    pub async fn load(session: &Session, client: &ApiClient) -> Result<Self, PageError> {
        session.require()?;
        let products = client
            .products()
            .await
            .map_err(|e| session.classify_failure(&e))?;
        Ok(Self::from_products(products))
    }

    /// Build the catalog from an already-fetched collection.
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The retained full collection, in fetch order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Products passing the filter, borrowed from the retained collection.
    #[must_use]
    pub fn filtered(&self, filter: &StoreFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Re-render the card grid for the given filter.
    #[must_use]
    pub fn grid(&self, filter: &StoreFilter) -> Vec<ProductCardView> {
        self.filtered(filter)
            .into_iter()
            .map(ProductCardView::from)
            .collect()
    }

    /// Distinct store ids in first-seen order, for building the filter bar.
    #[must_use]
    pub fn stores(&self) -> Vec<StoreId> {
        let mut stores: Vec<StoreId> = Vec::new();
        for product in &self.products {
            if !stores.contains(&product.store_id) {
                stores.push(product.store_id.clone());
            }
        }
        stores
    }
}
