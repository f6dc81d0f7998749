//! Typed view models built from fetched payloads.
//!
//! Each page's renderer turns a JSON snapshot into a display-ready model:
//! all currency formatting, seller labels, and direction classification
//! happen at construction, so rendering is a pure read. Views implement
//! `Display` in place of the DOM fragments the original produced.

pub mod cart;
pub mod catalog;
pub mod dashboard;

pub use cart::{CartLineView, CartPage, CartView, SubtotalView};
pub use catalog::{Catalog, ProductCardView};
pub use dashboard::{DashboardView, MovementList, MovementTone, MovementView};
