//! Token types for the Logos-based separator lexer.

use logos::Logos;

/// Tokens recognised while scanning a release name for field separators.
///
/// Only the three candidate delimiters are interesting; everything between
/// them is swallowed as a single [`SeparatorToken::Text`] run.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorToken {
    #[token(" ")]
    Space,

    #[token(".")]
    Dot,

    #[token("_")]
    Underscore,

    /// Any run of characters that is not a candidate delimiter
    #[regex(r"[^ ._]+")]
    Text,
}

/// A field separator a release name may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Space,
    Dot,
    Underscore,
}

impl Delimiter {
    /// The literal separator string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Space => " ",
            Delimiter::Dot => ".",
            Delimiter::Underscore => "_",
        }
    }

    pub(crate) fn from_token(token: SeparatorToken) -> Option<Self> {
        match token {
            SeparatorToken::Space => Some(Delimiter::Space),
            SeparatorToken::Dot => Some(Delimiter::Dot),
            SeparatorToken::Underscore => Some(Delimiter::Underscore),
            SeparatorToken::Text => None,
        }
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_tokens() {
        let tokens: Vec<_> = SeparatorToken::lexer("A.B_C D")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(
            tokens,
            vec![
                SeparatorToken::Text,
                SeparatorToken::Dot,
                SeparatorToken::Text,
                SeparatorToken::Underscore,
                SeparatorToken::Text,
                SeparatorToken::Space,
                SeparatorToken::Text,
            ]
        );
    }

    #[test]
    fn test_text_run_swallows_other_punctuation() {
        let tokens: Vec<_> = SeparatorToken::lexer("x265-Group")
            .filter_map(Result::ok)
            .collect();
        assert_eq!(tokens, vec![SeparatorToken::Text]);
    }

    #[test]
    fn test_delimiter_as_str() {
        assert_eq!(Delimiter::Space.as_str(), " ");
        assert_eq!(Delimiter::Dot.as_str(), ".");
        assert_eq!(Delimiter::Underscore.as_str(), "_");
        assert_eq!(Delimiter::Dot.to_string(), "\".\"");
    }
}
