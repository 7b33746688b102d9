//! Parsed release record.

use std::collections::BTreeSet;

use super::{Container, Edition, ReleaseType, Resolution, Source};

/// Season/episode position of a show release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShowInfo {
    /// Season number
    pub season: u16,
    /// Episode number, 0 for season packs
    pub episode: u16,
    /// Whether the release covers the whole season
    pub complete_season: bool,
}

impl ShowInfo {
    /// A release covering all of `season`.
    pub fn season_pack(season: u16) -> Self {
        Self {
            season,
            episode: 0,
            complete_season: true,
        }
    }

    /// A single-episode release.
    pub fn episode(season: u16, episode: u16) -> Self {
        Self {
            season,
            episode,
            complete_season: false,
        }
    }
}

/// Audio/video characteristics recovered from the release name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaInfo {
    pub container: Container,
    pub resolution: Resolution,
    pub source: Source,
    /// Spoken language, lowercase ("english", "german")
    pub language: Option<String>,
    /// Leftover tokens no classifier claimed, case preserved
    pub features: BTreeSet<String>,
}

/// The structured form of a scene release name.
///
/// `show_info` is `Some` exactly when `release_type` is [`ReleaseType::Show`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseRecord {
    /// Title of the release, words separated by single spaces
    pub name: String,
    /// Release year
    pub year: Option<u16>,
    pub release_type: ReleaseType,
    pub edition: Edition,
    pub show_info: Option<ShowInfo>,
    pub media_info: MediaInfo,
    /// Release group signature, empty if none was found
    pub group: String,
}

impl ReleaseRecord {
    /// Returns true if the release was identified as a show.
    pub fn is_show(&self) -> bool {
        self.release_type == ReleaseType::Show
    }

    /// Returns true if the release was identified as a movie.
    pub fn is_movie(&self) -> bool {
        self.release_type == ReleaseType::Movie
    }

    /// Returns true if a release group signature was found.
    pub fn has_group(&self) -> bool {
        !self.group.is_empty()
    }
}
