//! Quality-related enums for video resolution and release source.

use crate::error::InvalidValue;

/// Video resolution of the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Resolution {
    /// No resolution marker was recognised
    #[default]
    Unknown,
    /// 720p HD
    #[cfg_attr(feature = "serde", serde(rename = "720p"))]
    _720p,
    /// 1080p Full HD
    #[cfg_attr(feature = "serde", serde(rename = "1080p"))]
    _1080p,
    /// 2160p Ultra HD (4K)
    #[cfg_attr(feature = "serde", serde(rename = "2160p"))]
    _2160p,
}

impl Resolution {
    /// Vertical line count, if known.
    pub fn height(&self) -> Option<u16> {
        match self {
            Resolution::Unknown => None,
            Resolution::_720p => Some(720),
            Resolution::_1080p => Some(1080),
            Resolution::_2160p => Some(2160),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Unknown => write!(f, "unknown"),
            Resolution::_720p => write!(f, "720p"),
            Resolution::_1080p => write!(f, "1080p"),
            Resolution::_2160p => write!(f, "2160p"),
        }
    }
}

impl std::str::FromStr for Resolution {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Resolution::Unknown),
            "720p" | "720" => Ok(Resolution::_720p),
            "1080p" | "1080" | "fullhd" => Ok(Resolution::_1080p),
            "2160p" | "2160" | "4k" | "uhd" => Ok(Resolution::_2160p),
            _ => Err(InvalidValue::new("resolution", s)),
        }
    }
}

/// Source/origin of the media release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Source {
    /// No source marker was recognised
    #[default]
    Unknown,
    /// Blu-ray disc rip
    BluRay,
    /// Web download (Amazon, Netflix, ...)
    Web,
    /// Region 5 release
    R5,
    /// Telescreen/cam recording from a theater
    Telescreen,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Unknown => write!(f, "unknown"),
            Source::BluRay => write!(f, "BluRay"),
            Source::Web => write!(f, "Web"),
            Source::R5 => write!(f, "R5"),
            Source::Telescreen => write!(f, "Telescreen"),
        }
    }
}

impl std::str::FromStr for Source {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Source::Unknown),
            "bluray" | "blu-ray" | "bdrip" => Ok(Source::BluRay),
            "web" | "web-dl" | "webrip" => Ok(Source::Web),
            "r5" | "region5" => Ok(Source::R5),
            "telescreen" | "ts" | "cam" | "camrip" => Ok(Source::Telescreen),
            _ => Err(InvalidValue::new("source", s)),
        }
    }
}
