use crate::error::CatalogError;
use crate::video::{NewVideo, VideoId, VideoRecord, VideoUpdate};
use async_trait::async_trait;

type Result<T> = std::result::Result<T, CatalogError>;

#[async_trait]
pub trait Catalog: Send + Sync + 'static {
    /// Stores a new record under a freshly assigned id and returns it.
    async fn create(&self, video: NewVideo) -> Result<VideoRecord>;

    /// Returns the record with the given id, if any.
    async fn get(&self, id: VideoId) -> Result<Option<VideoRecord>>;

    /// Returns every record in insertion order.
    async fn list(&self) -> Result<Vec<VideoRecord>>;

    /// Replaces the mutable fields of an existing record.
    /// Returns `Err(NotFound)` if the id is unknown.
    async fn update(&self, id: VideoId, update: VideoUpdate) -> Result<()>;

    /// Deletes a record. Returns `true` if the record existed and was removed.
    async fn delete(&self, id: VideoId) -> Result<bool>;

    /// Removes every record.
    async fn clear(&self) -> Result<()>;
}
