use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::Serialize;
use vidcat_core::{FieldError, Resolution, ValidationErrors, VideoId, VideoRecord};

/// The public JSON shape of a record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: VideoId,
    pub title: String,
    pub author: String,
    pub available_resolutions: Vec<Resolution>,
    pub can_be_downloaded: bool,
    pub min_age_restriction: Option<u8>,
    pub created_at: String,
    pub publication_date: String,
}

impl From<VideoRecord> for VideoResponse {
    fn from(record: VideoRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            author: record.author,
            available_resolutions: record.available_resolutions,
            can_be_downloaded: record.can_be_downloaded,
            min_age_restriction: record.min_age_restriction,
            created_at: iso8601(record.created_at),
            publication_date: iso8601(record.publication_date),
        }
    }
}

/// Body of a 400 response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorsResponse {
    pub errors_messages: Vec<FieldError>,
}

impl From<ValidationErrors> for ErrorsResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            errors_messages: errors.into_inner(),
        }
    }
}

/// Renders a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso8601(timestamp: Timestamp) -> String {
    let datetime = timestamp.to_zoned(TimeZone::UTC).datetime();
    format!(
        "{}.{:03}Z",
        datetime.strftime("%Y-%m-%dT%H:%M:%S"),
        datetime.subsec_nanosecond() / 1_000_000
    )
}
