// Keycase Settings Module
// Which convention to use when serializing and deserializing payloads

#![cfg(feature = "config")]

use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::Convention;

/// Direction a payload is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// In-process data going out to the external representation
    Serialize,
    /// External representation coming in
    Deserialize,
}

/// Key conventions per direction
///
/// Loaded from a TOML file (default: ~/.config/keycase/settings.toml):
///
/// ```toml
/// [key_transform]
/// serialize = "camel_lower"
/// deserialize = "underscore"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformSettings {
    pub serialize: Convention,
    pub deserialize: Convention,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Unknown key convention: {0}")]
    UnknownConvention(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    key_transform: Option<KeyTransformToml>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct KeyTransformToml {
    #[serde(default)]
    serialize: Option<String>,

    #[serde(default)]
    deserialize: Option<String>,
}

impl TransformSettings {
    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)?;
        let settings = Self::from_toml(&content)?;
        log::debug!("loaded key transform settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: SettingsToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        let mut settings = Self::default();
        if let Some(section) = parsed.key_transform {
            if let Some(name) = section.serialize {
                settings.serialize = parse_convention(&name)?;
            }
            if let Some(name) = section.deserialize {
                settings.deserialize = parse_convention(&name)?;
            }
        }
        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keycase").join("settings.toml"))
    }

    /// Load from the default path, falling back to defaults if it is missing
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Convention to apply for the given direction
    pub fn convention_for(&self, direction: Direction) -> Convention {
        match direction {
            Direction::Serialize => self.serialize,
            Direction::Deserialize => self.deserialize,
        }
    }
}

/// Parse a convention name, trimming whitespace
pub fn parse_convention(name: &str) -> Result<Convention, ConfigError> {
    Convention::from_str(name.trim()).map_err(|_| ConfigError::UnknownConvention(name.to_string()))
}
