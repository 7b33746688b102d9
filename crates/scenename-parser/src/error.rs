//! Error and status types for release name parsing.

/// Reasons a release name could not be turned into a record.
///
/// Only [`ParseError::EmptyName`] is produced by the current heuristics.
/// Every other input degrades to a best-effort record instead of failing, so
/// `Malformed` and `NoDelimiter` are reserved for stricter heuristics and
/// callers should still handle them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The release name was the empty string.
    #[error("release name is empty")]
    EmptyName,

    /// The release name could not be split into meaningful parts.
    #[error("malformed release name: {0}")]
    Malformed(String),

    /// None of the known delimiters occur in the release name.
    #[error("no delimiter found in release name")]
    NoDelimiter,
}

/// Four-valued status of a parse call.
///
/// This is the flat view of a `Result<ReleaseRecord, ParseError>`, handy for
/// reporting and for front ends that switch on the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParseStatus {
    Success,
    EmptyName,
    Malformed,
    NoDelimiter,
}

impl ParseStatus {
    /// Status corresponding to the outcome of a parse.
    pub fn of<T>(result: &Result<T, ParseError>) -> Self {
        match result {
            Ok(_) => ParseStatus::Success,
            Err(ParseError::EmptyName) => ParseStatus::EmptyName,
            Err(ParseError::Malformed(_)) => ParseStatus::Malformed,
            Err(ParseError::NoDelimiter) => ParseStatus::NoDelimiter,
        }
    }

    /// Returns true for [`ParseStatus::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, ParseStatus::Success)
    }
}

impl std::fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseStatus::Success => write!(f, "success"),
            ParseStatus::EmptyName => write!(f, "empty name"),
            ParseStatus::Malformed => write!(f, "malformed"),
            ParseStatus::NoDelimiter => write!(f, "no delimiter"),
        }
    }
}

/// Error returned when a model enum cannot be parsed from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct InvalidValue {
    /// Which kind of value was being parsed ("resolution", "source", ...).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl InvalidValue {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
