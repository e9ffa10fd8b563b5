//! Configuration management and validation.
//!
//! Holds the column layout and marker characters that define the catalog
//! dialect, plus reporting limits. Configuration is layered: built-in
//! defaults, overridden by a TOML file when one is given or found in the
//! user config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    COMMENT_MARKER, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_MAX_REPORTED_ERRORS,
    MISSING_MAGNITUDE_MARKER, SOUTHERN_MARKER, WESTERN_MARKER,
};
use crate::parser::ColumnLayout;
use crate::{CatalogError, Result};

/// Settings for converting one catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Fixed column positions
    pub layout: ColumnLayout,

    /// Lines starting with this character are ignored
    pub comment_marker: char,

    /// Magnitude columns starting with this character are missing readings
    pub missing_magnitude_marker: char,

    /// Latitude hemisphere letter that makes the value negative
    pub southern_marker: char,

    /// Longitude hemisphere letter that makes the value negative
    pub western_marker: char,

    /// Failed lines kept for the final report
    pub max_reported_errors: usize,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            layout: ColumnLayout::default(),
            comment_marker: COMMENT_MARKER,
            missing_magnitude_marker: MISSING_MAGNITUDE_MARKER,
            southern_marker: SOUTHERN_MARKER,
            western_marker: WESTERN_MARKER,
            max_reported_errors: DEFAULT_MAX_REPORTED_ERRORS,
        }
    }
}

impl ConverterConfig {
    /// Use a different column table
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Change how many failed lines the report lists
    pub fn with_max_reported_errors(mut self, max_reported_errors: usize) -> Self {
        self.max_reported_errors = max_reported_errors;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;

        if self.comment_marker.is_whitespace() {
            return Err(CatalogError::configuration(
                "comment_marker cannot be whitespace",
            ));
        }

        Ok(())
    }

    /// Parse and validate a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ConverterConfig =
            toml::from_str(&content).map_err(|source| CatalogError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `<config_dir>/hypocat/config.toml`, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from an explicit file, else the default file if present, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_config_path().filter(|path| path.exists()) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
