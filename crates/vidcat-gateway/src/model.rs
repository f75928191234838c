mod health;
mod video;

pub use health::HealthResponse;
pub use video::{iso8601, ErrorsResponse, VideoResponse};
