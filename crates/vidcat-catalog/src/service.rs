use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use std::sync::Arc;
use tracing::{debug, trace};
use vidcat_core::{
    Catalog, CatalogError, NewVideo, Repository, VideoId, VideoRecord, VideoUpdate,
};
use vidcat_generator::Generator;

type Result<T> = std::result::Result<T, CatalogError>;

/// Delay between creation and the default publication date.
const PUBLICATION_DELAY: SignedDuration = SignedDuration::from_hours(24);

/// A concrete implementation of the `Catalog` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - id assignment for new records
/// - creation timestamps and the default publication date
/// - field-by-field updates that keep `id` and `created_at`
///
/// Note: The `Generator` implementation is responsible for ensuring
/// uniqueness of generated ids. No collision retry is performed.
#[derive(Debug)]
pub struct CatalogService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

impl<R, G> Clone for CatalogService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> CatalogService<R, G> {
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Catalog for CatalogService<R, G> {
    async fn create(&self, video: NewVideo) -> Result<VideoRecord> {
        let created_at = Timestamp::now();
        let record = VideoRecord::builder()
            .id(self.generator.generate())
            .title(video.title)
            .author(video.author)
            .available_resolutions(video.available_resolutions)
            .can_be_downloaded(video.can_be_downloaded)
            .created_at(created_at)
            .publication_date(created_at + PUBLICATION_DELAY)
            .build();

        self.repository.create(record.clone()).await?;

        debug!(id = %record.id, title = %record.title, "created video");
        Ok(record)
    }

    async fn get(&self, id: VideoId) -> Result<Option<VideoRecord>> {
        trace!(id = %id, "looking up video");
        Ok(self.repository.find_by_id(id).await?)
    }

    async fn list(&self) -> Result<Vec<VideoRecord>> {
        Ok(self.repository.find_all().await?)
    }

    async fn update(&self, id: VideoId, update: VideoUpdate) -> Result<()> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            trace!(id = %id, "video to update not found");
            return Err(CatalogError::NotFound(id));
        };

        let updated = existing.with_update(update);
        if !self.repository.update_by_id(id, updated).await? {
            return Err(CatalogError::UpdateNotApplied(id));
        }

        debug!(id = %id, "updated video");
        Ok(())
    }

    async fn delete(&self, id: VideoId) -> Result<bool> {
        let deleted = self.repository.delete_by_id(id).await?;
        debug!(id = %id, deleted, "delete video");
        Ok(deleted)
    }

    async fn clear(&self) -> Result<()> {
        self.repository.delete_all().await?;
        debug!("cleared all videos");
        Ok(())
    }
}
