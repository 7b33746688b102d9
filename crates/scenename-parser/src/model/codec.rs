//! Video container/codec family.

use crate::error::InvalidValue;

/// Video compression family the release was encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Container {
    #[default]
    Unknown,
    /// H.264/AVC (x264)
    H264,
    /// H.265/HEVC (x265)
    H265,
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Unknown => write!(f, "unknown"),
            Container::H264 => write!(f, "H.264"),
            Container::H265 => write!(f, "H.265"),
        }
    }
}

impl std::str::FromStr for Container {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Container::Unknown),
            "h264" | "h.264" | "x264" | "avc" => Ok(Container::H264),
            "h265" | "h.265" | "x265" | "hevc" => Ok(Container::H265),
            _ => Err(InvalidValue::new("container", s)),
        }
    }
}
