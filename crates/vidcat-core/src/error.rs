use crate::video::VideoId;
use thiserror::Error;

/// Errors raised by repository backends.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("video id already exists: {0}")]
    Conflict(VideoId),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Errors raised by catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("video not found: {0}")]
    NotFound(VideoId),
    #[error("update of video {0} could not be applied")]
    UpdateNotApplied(VideoId),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
