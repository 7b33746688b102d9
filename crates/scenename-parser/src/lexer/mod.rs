//! Delimiter inference and tokenization of release names.
//!
//! Candidate separators are counted with a [logos](https://docs.rs/logos)
//! lexer in a single pass; the winning separator is then used for a literal
//! split of the whole name.

mod token;
pub use token::{Delimiter, SeparatorToken};

use logos::Logos;
use std::collections::VecDeque;

/// Candidate delimiters in priority order. Ties go to the earlier entry.
pub const DELIMITERS: [Delimiter; 3] = [Delimiter::Space, Delimiter::Dot, Delimiter::Underscore];

/// Occurrence counts of each candidate delimiter in a release name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelimiterStats {
    pub space: usize,
    pub dot: usize,
    pub underscore: usize,
}

impl DelimiterStats {
    /// Count every candidate delimiter in `input`.
    pub fn collect(input: &str) -> Self {
        let mut stats = Self::default();
        for token in SeparatorToken::lexer(input).filter_map(Result::ok) {
            match Delimiter::from_token(token) {
                Some(Delimiter::Space) => stats.space += 1,
                Some(Delimiter::Dot) => stats.dot += 1,
                Some(Delimiter::Underscore) => stats.underscore += 1,
                None => {}
            }
        }
        stats
    }

    /// Number of occurrences of `delimiter`.
    pub fn count(&self, delimiter: Delimiter) -> usize {
        match delimiter {
            Delimiter::Space => self.space,
            Delimiter::Dot => self.dot,
            Delimiter::Underscore => self.underscore,
        }
    }

    /// The most frequent delimiter, earliest in [`DELIMITERS`] on a tie.
    pub fn best(&self) -> Delimiter {
        let mut best = DELIMITERS[0];
        for candidate in &DELIMITERS[1..] {
            if self.count(*candidate) > self.count(best) {
                best = *candidate;
            }
        }
        best
    }
}

/// Guess the field separator used by a release name.
///
/// Picks whichever of space, dot and underscore occurs most often. A name
/// with none of them falls back to space.
///
/// # Examples
///
/// ```
/// use scenename_parser::lexer::{guess_delimiter, Delimiter};
///
/// assert_eq!(guess_delimiter("Show.Name.S03.1080p"), Delimiter::Dot);
/// assert_eq!(guess_delimiter("NoSeparators"), Delimiter::Space);
/// ```
pub fn guess_delimiter(input: &str) -> Delimiter {
    let stats = DelimiterStats::collect(input);
    let best = stats.best();
    tracing::trace!(
        space = stats.space,
        dot = stats.dot,
        underscore = stats.underscore,
        delimiter = %best,
        "guessed delimiter"
    );
    best
}

/// Split `input` on every literal occurrence of `delimiter`.
///
/// Empty parts are kept, including a trailing one after a final delimiter.
/// `delimiter` must not be empty.
pub fn tokenize(input: &str, delimiter: &str) -> VecDeque<String> {
    debug_assert!(!delimiter.is_empty(), "delimiter must not be empty");
    input.split(delimiter).map(str::to_owned).collect()
}
