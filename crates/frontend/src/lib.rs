//! NowApp headless front-end library.
//!
//! Reimplements the browser front-end of the NowApp banking/shopping demo as
//! a reusable client pipeline: every page follows the same shape of
//! "require session, fetch JSON, render a view, handle user actions".
//!
//! # Architecture
//!
//! - [`api`] - Authenticated fetch client over the backend REST API
//! - [`session`] - Session guard and the persisted bearer credential
//! - [`views`] - Typed view models built from fetched payloads
//! - [`handlers`] - Form/action handlers with explicit per-control state
//! - [`widgets`] - Pure client-side widget state (star rating, store filter,
//!   review overlay), no network interaction
//!
//! The HTML presentation layer of the original is out of scope; views render
//! to plain text via `Display` so the CLI and tests consume the same output.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod session;
pub mod views;
pub mod widgets;

pub use config::FrontendConfig;
pub use error::AppError;
