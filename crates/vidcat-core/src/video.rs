use crate::resolution::Resolution;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;
use typed_builder::TypedBuilder;

/// Identifier of a record in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(u64);

impl VideoId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for VideoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for VideoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored video metadata record.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct VideoRecord {
    pub id: VideoId,
    #[builder(setter(into))]
    pub title: String,
    #[builder(setter(into))]
    pub author: String,
    #[builder(default)]
    pub available_resolutions: Vec<Resolution>,
    #[builder(default)]
    pub can_be_downloaded: bool,
    #[builder(default)]
    pub min_age_restriction: Option<u8>,
    pub created_at: Timestamp,
    pub publication_date: Timestamp,
}

impl VideoRecord {
    /// Builds the replacement for this record after an update.
    ///
    /// Every mutable field is taken from `update`; `id` and `created_at`
    /// are carried over unchanged.
    pub fn with_update(&self, update: VideoUpdate) -> Self {
        Self {
            id: self.id,
            title: update.title,
            author: update.author,
            available_resolutions: update.available_resolutions,
            can_be_downloaded: update.can_be_downloaded,
            min_age_restriction: update.min_age_restriction,
            created_at: self.created_at,
            publication_date: update.publication_date,
        }
    }
}

/// Validated input for creating a record.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVideo {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
}

/// Validated input replacing every mutable field of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoUpdate {
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub publication_date: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn record() -> VideoRecord {
        let created_at = Timestamp::from_second(1_700_000_000).unwrap();
        VideoRecord::builder()
            .id(VideoId::new(42))
            .title("Original")
            .author("Someone")
            .available_resolutions(vec![Resolution::P480])
            .created_at(created_at)
            .publication_date(created_at + SignedDuration::from_hours(24))
            .build()
    }

    #[test]
    fn builder_defaults() {
        let record = record();
        assert!(!record.can_be_downloaded);
        assert_eq!(record.min_age_restriction, None);
    }

    #[test]
    fn update_keeps_id_and_created_at() {
        let original = record();
        let publication_date = Timestamp::from_second(1_800_000_000).unwrap();

        let updated = original.with_update(VideoUpdate {
            title: "Updated".to_string(),
            author: "Other".to_string(),
            available_resolutions: vec![Resolution::P144, Resolution::P240],
            can_be_downloaded: true,
            min_age_restriction: Some(16),
            publication_date,
        });

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.author, "Other");
        assert_eq!(
            updated.available_resolutions,
            vec![Resolution::P144, Resolution::P240]
        );
        assert!(updated.can_be_downloaded);
        assert_eq!(updated.min_age_restriction, Some(16));
        assert_eq!(updated.publication_date, publication_date);
    }

    #[test]
    fn id_parses_from_path_segment() {
        assert_eq!("1700000000123".parse::<VideoId>(), Ok(VideoId::new(1_700_000_000_123)));
        assert!("abc".parse::<VideoId>().is_err());
        assert!("-1".parse::<VideoId>().is_err());
    }
}
