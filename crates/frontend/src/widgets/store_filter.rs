//! Catalog filter buttons.
//!
//! A row of mutually exclusive toggles: "all" plus one per store. Exactly
//! one is active at any time; activating one deactivates the rest by
//! construction (the bar stores a single active index).

use nowapp_core::StoreId;

use crate::api::types::Product;

/// One filter option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreFilter {
    /// Show the whole catalog.
    All,
    /// Show only products owned by this store.
    Store(StoreId),
}

impl StoreFilter {
    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Store(store_id) => product.store_id == *store_id,
        }
    }

    /// Button label for this option.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::All => "Todos".to_string(),
            Self::Store(store_id) => store_id.label(),
        }
    }
}

/// The filter button row.
#[derive(Debug, Clone)]
pub struct FilterBar {
    options: Vec<StoreFilter>,
    active: usize,
}

impl FilterBar {
    /// Build the bar from the stores present in the catalog; "all" comes
    /// first and starts active.
    #[must_use]
    pub fn new(stores: impl IntoIterator<Item = StoreId>) -> Self {
        let mut options = vec![StoreFilter::All];
        options.extend(stores.into_iter().map(StoreFilter::Store));
        Self { options, active: 0 }
    }

    /// All options in display order.
    #[must_use]
    pub fn options(&self) -> &[StoreFilter] {
        &self.options
    }

    /// The currently active option.
    #[must_use]
    pub fn active(&self) -> &StoreFilter {
        self.options.get(self.active).unwrap_or(&StoreFilter::All)
    }

    /// Whether the option at `index` is the active one.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Click the button at `index`. Out-of-range clicks are ignored.
    pub fn activate(&mut self, index: usize) {
        if index < self.options.len() {
            self.active = index;
        }
    }

    /// Activate the option matching a store, or "all" when `None`.
    pub fn select(&mut self, store: Option<&StoreId>) {
        let target = store.map_or(StoreFilter::All, |id| StoreFilter::Store(id.clone()));
        if let Some(index) = self.options.iter().position(|option| *option == target) {
            self.active = index;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(store: &str) -> Product {
        serde_json::from_str(&format!(
            r#"{{"_id":"p","name":"x","price":1.0,"image_urls":[],"store_id":"{store}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_all_is_first_and_initially_active() {
        let bar = FilterBar::new([StoreId::from("store_a"), StoreId::from("store_b")]);
        assert_eq!(bar.options().len(), 3);
        assert_eq!(*bar.active(), StoreFilter::All);
    }

    #[test]
    fn test_exactly_one_active_after_toggle() {
        let mut bar = FilterBar::new([StoreId::from("store_a"), StoreId::from("store_b")]);
        bar.activate(2);
        assert!(bar.is_active(2));
        assert!(!bar.is_active(0));
        assert!(!bar.is_active(1));
    }

    #[test]
    fn test_out_of_range_click_ignored() {
        let mut bar = FilterBar::new([StoreId::from("store_a")]);
        bar.activate(9);
        assert!(bar.is_active(0));
    }

    #[test]
    fn test_select_by_store() {
        let mut bar = FilterBar::new([StoreId::from("store_a"), StoreId::from("store_b")]);
        bar.select(Some(&StoreId::from("store_b")));
        assert_eq!(*bar.active(), StoreFilter::Store(StoreId::from("store_b")));
        bar.select(None);
        assert_eq!(*bar.active(), StoreFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        let filter = StoreFilter::Store(StoreId::from("store_a"));
        assert!(filter.matches(&product("store_a")));
        assert!(!filter.matches(&product("store_b")));
        assert!(StoreFilter::All.matches(&product("store_b")));
    }

    #[test]
    fn test_labels() {
        assert_eq!(StoreFilter::All.label(), "Todos");
        assert_eq!(
            StoreFilter::Store(StoreId::from("store_green_market")).label(),
            "Green Market"
        );
    }
}
