use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A video resolution a record can be served in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    P1440,
    P2160,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resolution: {0}")]
pub struct UnknownResolution(pub String);

impl Resolution {
    /// Every supported resolution, lowest first.
    pub const ALL: [Resolution; 8] = [
        Resolution::P144,
        Resolution::P240,
        Resolution::P360,
        Resolution::P480,
        Resolution::P720,
        Resolution::P1080,
        Resolution::P1440,
        Resolution::P2160,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::P144 => "P144",
            Resolution::P240 => "P240",
            Resolution::P360 => "P360",
            Resolution::P480 => "P480",
            Resolution::P720 => "P720",
            Resolution::P1080 => "P1080",
            Resolution::P1440 => "P1440",
            Resolution::P2160 => "P2160",
        }
    }
}

impl FromStr for Resolution {
    type Err = UnknownResolution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P144" => Ok(Resolution::P144),
            "P240" => Ok(Resolution::P240),
            "P360" => Ok(Resolution::P360),
            "P480" => Ok(Resolution::P480),
            "P720" => Ok(Resolution::P720),
            "P1080" => Ok(Resolution::P1080),
            "P1440" => Ok(Resolution::P1440),
            "P2160" => Ok(Resolution::P2160),
            other => Err(UnknownResolution(other.to_string())),
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
