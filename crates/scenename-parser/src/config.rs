//! Parser configuration.

use crate::model::ReleaseType;

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use scenename_parser::config::ParserConfig;
/// use scenename_parser::ReleaseType;
///
/// let config = ParserConfig::builder()
///     .delimiter(".")
///     .release_type_hint(ReleaseType::Movie)
///     .build();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Field separator used by every name this parser sees.
    /// `None` (or an empty string) guesses the separator per name.
    pub delimiter: Option<String>,

    /// Release type applied by [`crate::Parser::parse`].
    /// `Unknown` infers the type from a season/episode marker.
    pub release_type_hint: ReleaseType,
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    delimiter: Option<String>,
    release_type_hint: Option<ReleaseType>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed delimiter instead of guessing one per name.
    ///
    /// Any non-empty string works, it is matched literally.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Pin the release type instead of inferring it.
    pub fn release_type_hint(mut self, hint: ReleaseType) -> Self {
        self.release_type_hint = Some(hint);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            delimiter: self.delimiter.filter(|d| !d.is_empty()),
            release_type_hint: self.release_type_hint.unwrap_or_default(),
        }
    }
}
