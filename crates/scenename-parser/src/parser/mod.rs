//! The release name pipeline.
//!
//! Stages run strictly in order over one token list:
//! delimiter guess, tokenize, title/year, group, keyword battery,
//! season/episode, then assembly of the leftovers.

mod episode;
mod features;
mod group;
mod title;

pub(crate) use episode::EpisodeMatcher;
pub use features::{tag_features, FeatureTags};

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexer::{guess_delimiter, tokenize};
use crate::model::{MediaInfo, ReleaseRecord, ReleaseType};

/// Parse a release name with an explicit release type hint.
///
/// `ReleaseType::Unknown` asks the pipeline to infer the type from a
/// season/episode marker.
pub(crate) fn parse_with_config(
    input: &str,
    config: &ParserConfig,
    matcher: &EpisodeMatcher,
    hint: ReleaseType,
) -> Result<ReleaseRecord, ParseError> {
    if input.is_empty() {
        return Err(ParseError::EmptyName);
    }

    let delimiter = match config.delimiter.as_deref() {
        Some(delimiter) if !delimiter.is_empty() => delimiter,
        _ => guess_delimiter(input).as_str(),
    };

    let mut tokens = tokenize(input, delimiter);
    let mut record = ReleaseRecord::default();

    let extracted = title::extract(&mut tokens);
    if extracted.year.is_some() {
        record.name = extracted.title;
        record.year = extracted.year;
    } else {
        // Without a year there is no reliable end of the title. Start over
        // and rebuild the title from whatever the classifiers leave behind.
        tracing::debug!(input, "no release year found, rebuilding title from leftovers");
        tokens = tokenize(input, delimiter);
    }

    if let Some(group) = group::extract(&mut tokens) {
        tracing::debug!(group = %group, "found release group");
        record.group = group;
    }

    let tags = tag_features(&mut tokens);
    record.edition = tags.edition;

    match hint {
        ReleaseType::Unknown => {
            if let Some(info) = matcher.detect(&mut tokens) {
                record.release_type = ReleaseType::Show;
                record.show_info = Some(info);
            }
        }
        ReleaseType::Show => {
            record.release_type = ReleaseType::Show;
            record.show_info = Some(matcher.detect(&mut tokens).unwrap_or_default());
        }
        ReleaseType::Movie => {
            record.release_type = ReleaseType::Movie;
        }
    }

    if record.year.is_none() {
        record.name = tokens
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_owned();
    }

    record.media_info = MediaInfo {
        container: tags.container,
        resolution: tags.resolution,
        source: tags.source,
        language: Some(tags.language),
        features: tokens.into_iter().collect(),
    };

    debug_assert_eq!(
        record.show_info.is_some(),
        record.release_type == ReleaseType::Show
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Container, Edition, Resolution, ShowInfo, Source};

    fn parse(input: &str) -> Result<ReleaseRecord, ParseError> {
        parse_with_config(
            input,
            &ParserConfig::default(),
            &EpisodeMatcher::new(),
            ReleaseType::Unknown,
        )
    }

    fn features(record: &ReleaseRecord) -> Vec<&str> {
        record
            .media_info
            .features
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(parse(""), Err(ParseError::EmptyName));
    }

    #[test]
    fn test_movie_with_year() {
        let record = parse("Random.Movie.Name.2015.German.DL.1080p.BluRay.x265-ReleaseGroup")
            .expect("should parse");
        assert_eq!(record.name, "Random Movie Name");
        assert_eq!(record.year, Some(2015));
        assert_eq!(record.release_type, ReleaseType::Unknown);
        assert!(record.show_info.is_none());
        assert_eq!(record.edition, Edition::None);
        assert_eq!(record.media_info.resolution, Resolution::_1080p);
        assert_eq!(record.media_info.source, Source::BluRay);
        assert_eq!(record.media_info.container, Container::H265);
        assert_eq!(record.media_info.language.as_deref(), Some("german"));
        assert_eq!(record.group, "ReleaseGroup");
        assert_eq!(features(&record), vec!["DL"]);
    }

    #[test]
    fn test_inferred_episode() {
        let record = parse("Show.Name.2019.S01E05.720p.WEB.x264-GRP").expect("should parse");
        assert_eq!(record.name, "Show Name");
        assert_eq!(record.year, Some(2019));
        assert_eq!(record.release_type, ReleaseType::Show);
        assert_eq!(record.show_info, Some(ShowInfo::episode(1, 5)));
        assert_eq!(record.media_info.language.as_deref(), Some("english"));
        assert!(record.media_info.features.is_empty());
    }

    #[test]
    fn test_no_year_rebuilds_title() {
        let record = parse("Random Movie Name EXTENDED CUT German 1080p BluRay x265-ReleaseGroup")
            .expect("should parse");
        assert_eq!(record.name, "Random Movie Name");
        assert_eq!(record.year, None);
        assert_eq!(record.edition, Edition::Extended);
        assert_eq!(record.group, "ReleaseGroup");
        assert_eq!(features(&record), vec!["Movie", "Name", "Random"]);
    }

    #[test]
    fn test_no_year_keeps_unclassified_words_in_title() {
        let record = parse("Random Movie Name EXTENDED CUT German DL 1080p BluRay x265-ReleaseGroup")
            .expect("should parse");
        assert_eq!(record.name, "Random Movie Name DL");
        assert_eq!(features(&record), vec!["DL", "Movie", "Name", "Random"]);
    }

    #[test]
    fn test_year_is_last_token() {
        let record = parse("Movie.2015").expect("should parse");
        assert_eq!(record.name, "Movie");
        assert_eq!(record.year, Some(2015));
        assert_eq!(record.group, "");
        assert!(record.media_info.features.is_empty());
    }

    #[test]
    fn test_single_word() {
        let record = parse("Movie").expect("should parse");
        assert_eq!(record.name, "Movie");
        assert_eq!(record.year, None);
        assert_eq!(features(&record), vec!["Movie"]);
    }

    #[test]
    fn test_configured_delimiter() {
        let config = ParserConfig::builder().delimiter("_").build();
        let record = parse_with_config(
            "Some.Movie_2020_1080p",
            &config,
            &EpisodeMatcher::new(),
            ReleaseType::Unknown,
        )
        .expect("should parse");
        assert_eq!(record.name, "Some.Movie");
        assert_eq!(record.year, Some(2020));
        assert_eq!(record.media_info.resolution, Resolution::_1080p);
    }

    #[test]
    fn test_empty_configured_delimiter_falls_back_to_guess() {
        let config = ParserConfig {
            delimiter: Some(String::new()),
            ..Default::default()
        };
        let record = parse_with_config(
            "Movie.2020.720p",
            &config,
            &EpisodeMatcher::new(),
            ReleaseType::Unknown,
        )
        .expect("should parse");
        assert_eq!(record.name, "Movie");
        assert_eq!(record.media_info.resolution, Resolution::_720p);
    }

    #[test]
    fn test_movie_hint_skips_marker_scan() {
        let record = parse_with_config(
            "Show.2010.S01E01.720p",
            &ParserConfig::default(),
            &EpisodeMatcher::new(),
            ReleaseType::Movie,
        )
        .expect("should parse");
        assert_eq!(record.release_type, ReleaseType::Movie);
        assert!(record.show_info.is_none());
        assert_eq!(features(&record), vec!["S01E01"]);
    }

    #[test]
    fn test_show_hint_without_marker() {
        let record = parse_with_config(
            "Show.2010.720p",
            &ParserConfig::default(),
            &EpisodeMatcher::new(),
            ReleaseType::Show,
        )
        .expect("should parse");
        assert_eq!(record.release_type, ReleaseType::Show);
        assert_eq!(record.show_info, Some(ShowInfo::default()));
    }
}
