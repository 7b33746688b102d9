//! Edition of the release.

use crate::error::InvalidValue;

/// Special edition marker of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Edition {
    /// Regular theatrical edition
    #[default]
    None,
    /// Extended/uncut edition
    Extended,
    /// Director's cut
    DirectorsCut,
}

impl std::fmt::Display for Edition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Edition::None => write!(f, "Standard"),
            Edition::Extended => write!(f, "Extended cut"),
            Edition::DirectorsCut => write!(f, "Directors cut"),
        }
    }
}

impl std::str::FromStr for Edition {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "standard" => Ok(Edition::None),
            "extended" | "extended cut" => Ok(Edition::Extended),
            "directors cut" | "directors_cut" | "director's cut" => Ok(Edition::DirectorsCut),
            _ => Err(InvalidValue::new("edition", s)),
        }
    }
}
