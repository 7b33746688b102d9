//! Data model types for parsed release names.
//!
//! This module contains the output record and the closed enums used to
//! classify edition, resolution, source and container.

mod codec;
mod edition;
mod quality;
mod release;
mod release_type;

pub use codec::Container;
pub use edition::Edition;
pub use quality::{Resolution, Source};
pub use release::{MediaInfo, ReleaseRecord, ShowInfo};
pub use release_type::ReleaseType;

/// Language assumed for every release until a language marker says otherwise.
pub const DEFAULT_LANGUAGE: &str = "english";
