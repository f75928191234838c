use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::trace;
use vidcat_core::{ReadRepository, Repository, StorageError, VideoId, VideoRecord};

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory implementation of the Repository trait.
///
/// Records live in a `Vec` so that listings come back in insertion order;
/// lookups are linear scans by id. Every operation runs to completion under
/// the lock.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: RwLock<Vec<VideoRecord>>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    fn position(records: &[VideoRecord], id: VideoId) -> Option<usize> {
        records.iter().position(|record| record.id == id)
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn find_by_id(&self, id: VideoId) -> Result<Option<VideoRecord>> {
        let records = self.storage.read();
        Ok(records.iter().find(|record| record.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<VideoRecord>> {
        Ok(self.storage.read().clone())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn create(&self, record: VideoRecord) -> Result<()> {
        let mut records = self.storage.write();
        if Self::position(&records, record.id).is_some() {
            return Err(StorageError::Conflict(record.id));
        }
        trace!(id = %record.id, "appending record");
        records.push(record);
        Ok(())
    }

    async fn update_by_id(&self, id: VideoId, record: VideoRecord) -> Result<bool> {
        if record.id != id {
            return Err(StorageError::InvalidData(format!(
                "replacement for {} carries id {}",
                id, record.id
            )));
        }

        let mut records = self.storage.write();
        let Some(index) = Self::position(&records, id) else {
            return Ok(false);
        };
        records[index] = record;
        Ok(true)
    }

    async fn delete_by_id(&self, id: VideoId) -> Result<bool> {
        let mut records = self.storage.write();
        let Some(index) = Self::position(&records, id) else {
            return Ok(false);
        };
        records.remove(index);
        Ok(true)
    }

    async fn delete_all(&self) -> Result<()> {
        let mut records = self.storage.write();
        trace!(removed = records.len(), "clearing records");
        records.clear();
        Ok(())
    }
}
