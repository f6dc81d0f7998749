//! Core types for the NowApp client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod money;
pub mod score;
pub mod store_label;

pub use credential::AccessToken;
pub use id::*;
pub use money::Money;
pub use score::{Score, ScoreError};
pub use store_label::store_label;
