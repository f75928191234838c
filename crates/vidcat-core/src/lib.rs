//! Core types and traits for the vidcat video catalog.
//!
//! This crate provides the record model, the field validator and the
//! storage/catalog traits shared by the storage backends, the catalog
//! service and the HTTP gateway.

pub mod catalog;
pub mod error;
pub mod repository;
pub mod resolution;
pub mod validation;
pub mod video;

pub use catalog::Catalog;
pub use error::{CatalogError, StorageError};
pub use repository::{ReadRepository, Repository};
pub use resolution::Resolution;
pub use validation::{Field, FieldError, ValidationErrors};
pub use video::{NewVideo, VideoId, VideoRecord, VideoUpdate};
