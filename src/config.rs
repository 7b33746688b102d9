//! CLI configuration file.
//!
//! ```toml
//! [parser]
//! delimiter = "."
//! release_type = "movie"
//! ```

use anyhow::{Context, Result};
use scenename_parser::config::ParserConfig;
use scenename_parser::ReleaseType;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_PATHS: [&str; 2] = ["./scenename.toml", "~/.config/scenename/config.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParserSection {
    pub delimiter: Option<String>,
    pub release_type: Option<ReleaseType>,
}

impl Config {
    /// Build the parser configuration, letting command-line values win.
    pub fn parser_config(
        &self,
        delimiter: Option<&str>,
        release_type: Option<ReleaseType>,
    ) -> Result<ParserConfig> {
        let mut builder = ParserConfig::builder();

        if let Some(delimiter) = delimiter.or(self.parser.delimiter.as_deref()) {
            if delimiter.is_empty() {
                anyhow::bail!("Delimiter cannot be empty");
            }
            builder = builder.delimiter(delimiter);
        }
        if let Some(hint) = release_type.or(self.parser.release_type) {
            builder = builder.release_type_hint(hint);
        }

        Ok(builder.build())
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;
    tracing::debug!("Loaded config from {:?}", path);

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    for path_str in DEFAULT_PATHS {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

fn validate_config(config: &Config) -> Result<()> {
    if config.parser.delimiter.as_deref() == Some("") {
        anyhow::bail!("Config delimiter cannot be empty");
    }
    Ok(())
}
