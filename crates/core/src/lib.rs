//! NowApp Core - Shared types library.
//!
//! This crate provides common types used across all NowApp client components:
//! - `frontend` - Headless pages, handlers, and the API client
//! - `cli` - Command-line driver for the pages
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Everything
//! that talks to the network lives in `nowapp-frontend`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for the bearer credential, identifiers,
//!   money, review scores, and the shared seller-label transform

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
