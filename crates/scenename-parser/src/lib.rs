//! # scenename-parser
//!
//! A heuristic parser for scene release names.
//!
//! Scene releases pack title, year, season/episode, edition, video and audio
//! characteristics, language and the release group into one delimited
//! string. This crate turns such a string into a [`ReleaseRecord`].
//!
//! ## Quick Start
//!
//! ```
//! use scenename_parser::{parse, Resolution, Source};
//!
//! let record = parse("Random.Movie.Name.2015.German.DL.1080p.BluRay.x265-ReleaseGroup").unwrap();
//!
//! assert_eq!(record.name, "Random Movie Name");
//! assert_eq!(record.year, Some(2015));
//! assert_eq!(record.media_info.resolution, Resolution::_1080p);
//! assert_eq!(record.media_info.source, Source::BluRay);
//! assert_eq!(record.group, "ReleaseGroup");
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use scenename_parser::{Parser, ReleaseType};
//! use scenename_parser::config::ParserConfig;
//!
//! let config = ParserConfig::builder()
//!     .delimiter(".")
//!     .release_type_hint(ReleaseType::Show)
//!     .build();
//!
//! let parser = Parser::new(config);
//! let record = parser.parse("Random.Show.Name.S03.Complete.German.DL.1080p.BluRay.x265-ReleaseGroup").unwrap();
//! assert!(record.show_info.unwrap().complete_season);
//! ```
//!
//! Parsing never fails on odd input: anything but the empty string yields a
//! best-effort record.

pub mod config;
pub mod error;
pub mod lexer;
pub mod model;

mod parser;

pub use error::{InvalidValue, ParseError, ParseStatus};
pub use model::{
    Container, Edition, MediaInfo, ReleaseRecord, ReleaseType, Resolution, ShowInfo, Source,
    DEFAULT_LANGUAGE,
};
pub use parser::{tag_features, FeatureTags};

use config::ParserConfig;
use parser::EpisodeMatcher;

/// Parse a release name using default settings.
///
/// The delimiter is guessed and the release type inferred. For more control,
/// use [`Parser`] with a custom [`ParserConfig`].
///
/// # Errors
///
/// Returns [`ParseError::EmptyName`] for an empty string.
///
/// # Examples
///
/// ```
/// use scenename_parser::{parse, ReleaseType, ShowInfo};
///
/// let record = parse("Show.Name.S01E05.720p.WEB.x264-GRP").unwrap();
/// assert_eq!(record.release_type, ReleaseType::Show);
/// assert_eq!(record.show_info, Some(ShowInfo::episode(1, 5)));
/// ```
pub fn parse(input: &str) -> Result<ReleaseRecord, ParseError> {
    Parser::default().parse(input)
}

/// A configurable release name parser.
///
/// A parser only holds read-only state, so one instance can be shared
/// between threads.
///
/// ```
/// use scenename_parser::{Parser, ReleaseType};
/// use scenename_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .release_type_hint(ReleaseType::Movie)
///     .build();
///
/// let parser = Parser::new(config);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    episodes: EpisodeMatcher,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            episodes: EpisodeMatcher::new(),
        }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a release name, using the configured release type hint.
    ///
    /// # Examples
    ///
    /// ```
    /// use scenename_parser::Parser;
    ///
    /// let parser = Parser::default();
    /// let record = parser.parse("Movie.2020.1080p.BluRay.x264-GROUP").unwrap();
    /// assert_eq!(record.year, Some(2020));
    /// ```
    pub fn parse(&self, input: &str) -> Result<ReleaseRecord, ParseError> {
        self.parse_as(input, self.config.release_type_hint)
    }

    /// Parse a release name with an explicit release type.
    ///
    /// `ReleaseType::Unknown` infers the type from a season/episode marker.
    /// `Movie` is taken as is. `Show` is taken as is and the marker is still
    /// read to fill in [`ShowInfo`].
    pub fn parse_as(&self, input: &str, hint: ReleaseType) -> Result<ReleaseRecord, ParseError> {
        parser::parse_with_config(input, &self.config, &self.episodes, hint)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
