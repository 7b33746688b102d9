//! Release type enum.

use crate::error::InvalidValue;

/// Kind of release: a movie, a show (season or episode), or undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReleaseType {
    /// Unknown or undetermined type
    #[default]
    Unknown,
    /// Movie/Film
    Movie,
    /// TV show
    Show,
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseType::Unknown => write!(f, "Unknown"),
            ReleaseType::Movie => write!(f, "Movie"),
            ReleaseType::Show => write!(f, "Show"),
        }
    }
}

impl std::str::FromStr for ReleaseType {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" | "auto" => Ok(ReleaseType::Unknown),
            "movie" | "film" => Ok(ReleaseType::Movie),
            "show" | "tv" | "series" => Ok(ReleaseType::Show),
            _ => Err(InvalidValue::new("release type", s)),
        }
    }
}
