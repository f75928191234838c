//! Video catalog service implementation.
//!
//! This crate composes a [`Repository`](vidcat_core::Repository) and an id
//! [`Generator`](vidcat_generator::Generator) into the catalog the HTTP
//! gateway talks to. Core types are re-exported from `vidcat_core`.

pub mod service;

pub use service::CatalogService;
pub use vidcat_core::{Catalog, CatalogError};
