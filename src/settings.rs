//! Settings file support
//!
//! A TOML file may provide any command-line parameter. Command-line values
//! are layered on top with [`Settings::merge`], then [`Settings::into_config`]
//! fills the remaining gaps with built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::LogoConfig;

/// Errors that can occur when loading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Optional values for every generation parameter
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub name: Option<String>,
    pub institution: Option<String>,
    pub direction: Option<String>,
    pub eol: Option<String>,
    pub heights: Option<Vec<i64>>,
    pub formats: Option<Vec<String>>,
    pub with_margin: Option<bool>,
    pub without_margin: Option<bool>,
    pub for_signature: Option<bool>,
    pub quality: Option<i64>,
    pub palette16: Option<bool>,
    pub font: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub quiet: Option<bool>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Parse settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Layer `overrides` on top of `self`; values set in `overrides` win
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            name: overrides.name.or(self.name),
            institution: overrides.institution.or(self.institution),
            direction: overrides.direction.or(self.direction),
            eol: overrides.eol.or(self.eol),
            heights: overrides.heights.or(self.heights),
            formats: overrides.formats.or(self.formats),
            with_margin: overrides.with_margin.or(self.with_margin),
            without_margin: overrides.without_margin.or(self.without_margin),
            for_signature: overrides.for_signature.or(self.for_signature),
            quality: overrides.quality.or(self.quality),
            palette16: overrides.palette16.or(self.palette16),
            font: overrides.font.or(self.font),
            output_dir: overrides.output_dir.or(self.output_dir),
            quiet: overrides.quiet.or(self.quiet),
        }
    }

    /// Build a configuration, using defaults for unset values
    ///
    /// `font` and `quiet` concern the caller and are not part of the
    /// configuration.
    pub fn into_config(self) -> LogoConfig {
        let mut config = LogoConfig::new();
        if let Some(name) = self.name {
            config = config.with_name(name);
        }
        if let Some(institution) = self.institution {
            config = config.with_institution(institution);
        }
        if let Some(direction) = self.direction {
            config = config.with_direction(direction);
        }
        if let Some(eol) = self.eol {
            config = config.with_line_break(eol);
        }
        if let Some(heights) = self.heights {
            config = config.with_heights(heights);
        }
        if let Some(formats) = self.formats {
            config = config.with_formats(formats);
        }
        if let Some(quality) = self.quality {
            config = config.with_quality(quality);
        }
        if let Some(output_dir) = self.output_dir {
            config = config.with_output_dir(output_dir);
        }
        config
            .with_margin(self.with_margin.unwrap_or(false))
            .without_margin(self.without_margin.unwrap_or(false))
            .for_signature(self.for_signature.unwrap_or(false))
            .with_palette16(self.palette16.unwrap_or(false))
    }
}
