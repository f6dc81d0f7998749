//! Seller-label formatting.
//!
//! Store identifiers arrive as `store_green_market` and display as
//! `Green Market`. The same transform is applied everywhere a seller
//! reference is shown (cart lines, subtotals, product cards).

use super::id::StoreId;

/// Fixed prefix stripped from store identifiers before display.
const STORE_PREFIX: &str = "store_";

/// Format a raw store identifier as a human-readable seller label.
///
/// Strips the `store_` prefix, replaces underscores with spaces, and
/// capitalizes the first letter of each word. Idempotent on its own output.
#[must_use]
pub fn store_label(raw: &str) -> String {
    let stripped = raw.strip_prefix(STORE_PREFIX).unwrap_or(raw);
    stripped
        .replace('_', " ")
        .split(' ')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl StoreId {
    /// Human-readable seller label for this store.
    #[must_use]
    pub fn label(&self) -> String {
        store_label(self.as_str())
    }
}
