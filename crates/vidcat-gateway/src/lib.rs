//! HTTP gateway for the vidcat video catalog.
//!
//! Exposes the catalog over JSON/HTTP with axum. The binary lives under
//! `bin/http`; the router is exported so it can be driven in-process.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
