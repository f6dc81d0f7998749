//! Ephemeral UI widget state.
//!
//! Pure client-side state with no network interaction: the ten-star rating
//! selector, the mutually exclusive catalog filter buttons, and the review
//! overlay. Each widget owns its state exclusively, so overlapping user
//! actions on independent controls cannot interfere.

pub mod overlay;
pub mod star_rating;
pub mod store_filter;

pub use overlay::ReviewOverlay;
pub use star_rating::StarRating;
pub use store_filter::{FilterBar, StoreFilter};
