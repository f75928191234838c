use crate::error::StorageError;
use crate::video::{VideoId, VideoRecord};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, StorageError>;

/// A read-only view of a repository.
#[async_trait]
pub trait ReadRepository: Send + Sync + 'static {
    /// Retrieves the record with the given id.
    /// Returns `None` if no such record exists.
    async fn find_by_id(&self, id: VideoId) -> Result<Option<VideoRecord>>;

    /// Returns a snapshot of every record in insertion order.
    async fn find_all(&self) -> Result<Vec<VideoRecord>>;
}

/// The authoritative, ordered collection of video records.
#[async_trait]
pub trait Repository: ReadRepository {
    /// Appends a new record. Returns `Err(Conflict)` if the id is already taken.
    async fn create(&self, record: VideoRecord) -> Result<()>;

    /// Replaces the record with the given id in place, keeping its position.
    /// Returns `true` if the record existed and was replaced.
    async fn update_by_id(&self, id: VideoId, record: VideoRecord) -> Result<bool>;

    /// Deletes the record with the given id.
    /// Returns `true` if the record existed and was removed.
    async fn delete_by_id(&self, id: VideoId) -> Result<bool>;

    /// Removes every record.
    async fn delete_all(&self) -> Result<()>;
}
