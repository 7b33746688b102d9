//! Keyword battery for edition, resolution, source, container and language.
//!
//! Rules run in table order and every rule runs, so when a name carries
//! markers for two values of the same category the later rule wins
//! ("720p" beats "1080p"). Matching tokens are removed from the list.

use std::collections::VecDeque;

use crate::model::{Container, Edition, Resolution, Source, DEFAULT_LANGUAGE};

/// How a keyword is compared against a token. Both ignore ASCII case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchMode {
    Exact,
    Substring,
}

#[derive(Debug, Clone, Copy)]
struct Keyword {
    text: &'static str,
    mode: MatchMode,
}

impl Keyword {
    const fn exact(text: &'static str) -> Self {
        Self {
            text,
            mode: MatchMode::Exact,
        }
    }

    const fn substring(text: &'static str) -> Self {
        Self {
            text,
            mode: MatchMode::Substring,
        }
    }

    fn matches(&self, token: &str) -> bool {
        match self.mode {
            MatchMode::Exact => token.eq_ignore_ascii_case(self.text),
            MatchMode::Substring => token
                .to_ascii_lowercase()
                .contains(&self.text.to_ascii_lowercase()),
        }
    }
}

/// Value assigned when a rule matches.
#[derive(Debug, Clone, Copy)]
enum Tag {
    Edition(Edition),
    Resolution(Resolution),
    Source(Source),
    Container(Container),
    Language(&'static str),
}

#[derive(Debug, Clone, Copy)]
struct KeywordRule {
    keywords: &'static [Keyword],
    tag: Tag,
}

impl KeywordRule {
    /// Remove every token matching any keyword. Returns true if one did.
    fn apply(&self, tokens: &mut VecDeque<String>) -> bool {
        let before = tokens.len();
        tokens.retain(|token| !self.keywords.iter().any(|k| k.matches(token)));
        tokens.len() != before
    }
}

const EDITION_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &[Keyword::substring("director")],
        tag: Tag::Edition(Edition::DirectorsCut),
    },
    KeywordRule {
        keywords: &[Keyword::substring("extended")],
        tag: Tag::Edition(Edition::Extended),
    },
];

/// Left over from "DIRECTORS CUT" / "EXTENDED CUT" once the edition is known.
const CUT_MARKER: &str = "CUT";

const MEDIA_RULES: &[KeywordRule] = &[
    // Resolution
    KeywordRule {
        keywords: &[
            Keyword::substring("2160"),
            Keyword::exact("UHD"),
            Keyword::exact("4K"),
        ],
        tag: Tag::Resolution(Resolution::_2160p),
    },
    KeywordRule {
        keywords: &[Keyword::substring("1080"), Keyword::substring("FullHD")],
        tag: Tag::Resolution(Resolution::_1080p),
    },
    KeywordRule {
        keywords: &[Keyword::substring("720")],
        tag: Tag::Resolution(Resolution::_720p),
    },
    // Source
    KeywordRule {
        keywords: &[Keyword::substring("BluRay"), Keyword::exact("BDRip")],
        tag: Tag::Source(Source::BluRay),
    },
    KeywordRule {
        keywords: &[Keyword::substring("R5"), Keyword::exact("Region5")],
        tag: Tag::Source(Source::R5),
    },
    KeywordRule {
        keywords: &[
            Keyword::substring("Web"),
            Keyword::exact("Amazon"),
            Keyword::exact("Netflix"),
        ],
        tag: Tag::Source(Source::Web),
    },
    KeywordRule {
        keywords: &[
            Keyword::substring("TeleScreen"),
            Keyword::exact("TS"),
            Keyword::exact("CAM"),
            Keyword::exact("CamRip"),
        ],
        tag: Tag::Source(Source::Telescreen),
    },
    // Container
    KeywordRule {
        keywords: &[Keyword::substring("265"), Keyword::substring("HEVC")],
        tag: Tag::Container(Container::H265),
    },
    KeywordRule {
        keywords: &[Keyword::substring("264"), Keyword::substring("AVC")],
        tag: Tag::Container(Container::H264),
    },
    // Language
    KeywordRule {
        keywords: &[Keyword::substring("GERMAN"), Keyword::substring("DEUTSCH")],
        tag: Tag::Language("german"),
    },
];

/// Values assigned by the keyword battery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureTags {
    pub edition: Edition,
    pub resolution: Resolution,
    pub source: Source,
    pub container: Container,
    pub language: String,
}

impl Default for FeatureTags {
    fn default() -> Self {
        Self {
            edition: Edition::default(),
            resolution: Resolution::default(),
            source: Source::default(),
            container: Container::default(),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }
}

impl FeatureTags {
    fn assign(&mut self, tag: Tag) {
        match tag {
            Tag::Edition(edition) => self.edition = edition,
            Tag::Resolution(resolution) => self.resolution = resolution,
            Tag::Source(source) => self.source = source,
            Tag::Container(container) => self.container = container,
            Tag::Language(language) => self.language = language.to_owned(),
        }
    }
}

/// Run the keyword battery over `tokens`, removing every token it claims.
///
/// The returned tags start from the defaults (no edition, unknown media,
/// english) and are overwritten by each matching rule in turn. A standalone
/// `CUT` token is dropped after the edition rules without assigning anything.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use scenename_parser::{tag_features, Resolution, Source};
///
/// let mut tokens: VecDeque<String> =
///     ["German", "DL", "1080p", "BluRay"].iter().map(|s| s.to_string()).collect();
/// let tags = tag_features(&mut tokens);
///
/// assert_eq!(tags.resolution, Resolution::_1080p);
/// assert_eq!(tags.source, Source::BluRay);
/// assert_eq!(tags.language, "german");
/// assert_eq!(tokens, vec!["DL"]);
/// ```
pub fn tag_features(tokens: &mut VecDeque<String>) -> FeatureTags {
    let mut tags = FeatureTags::default();

    for rule in EDITION_RULES {
        if rule.apply(tokens) {
            tags.assign(rule.tag);
        }
    }

    tokens.retain(|token| token != CUT_MARKER);

    for rule in MEDIA_RULES {
        if rule.apply(tokens) {
            tags.assign(rule.tag);
        }
    }

    tags
}
