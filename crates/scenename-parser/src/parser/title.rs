//! Title and release year extraction.
//!
//! Scene names put the title first and the year right after it:
//!
//! ```text
//! Random.Movie.Name.2000.2023.German.DL.1080p.BluRay.x265-ReleaseGroup
//! ```
//!
//! Words are collected into the title until a number shows up. A number
//! directly followed by another number belongs to the title ("Name 2000"),
//! the last number of such a run is the year. Everything after the year is
//! left for the feature stages.

use std::collections::VecDeque;

/// Result of scanning the front of the token list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TitleYear {
    pub title: String,
    /// `None` when the scan ran off the end without isolating a year.
    pub year: Option<u16>,
}

/// Consume tokens from the front until the release year has been found.
///
/// When no year is found every token has been consumed; the caller is
/// expected to re-tokenize and rebuild the title from leftovers.
pub(crate) fn extract(tokens: &mut VecDeque<String>) -> TitleYear {
    let mut title = String::new();

    while let Some(token) = tokens.pop_front() {
        if !is_numeric(&token) {
            title.push_str(&token);
            title.push(' ');
            continue;
        }

        if tokens.front().is_some_and(|next| is_numeric(next)) {
            // The number is part of the title, the next one may be the year
            title.push_str(&token);
            continue;
        }

        match token.parse::<u16>() {
            Ok(year) => {
                return TitleYear {
                    title: title.trim().to_owned(),
                    year: Some(year),
                };
            }
            // Too large to be a year
            Err(_) => {
                title.push_str(&token);
                title.push(' ');
            }
        }
    }

    TitleYear {
        title: title.trim().to_owned(),
        year: None,
    }
}

/// Non-empty and made of ASCII digits only.
pub(crate) fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
