//! Registry configuration files.
//!
//! Extra aliases and style types can be kept in a YAML document:
//!
//! ```yaml
//! aliases:
//!   rouge: red
//! types:
//!   cool: [roman, blue, red]
//!   loud: { font: bold, color: white, background: red }
//! ```
//!
//! Loading only checks the document's shape. Alias targets and type
//! components are still validated lazily, at resolution time.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::TypeSpec;

/// Error returned when a registry configuration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read registry config '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid registry config: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
    },
}

/// A style type entry, either as a `[font, color, background]` sequence or
/// as a map with named fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeEntry {
    Triple(String, String, String),
    Fields {
        font: String,
        color: String,
        background: String,
    },
}

impl TypeEntry {
    pub fn to_spec(&self) -> TypeSpec {
        match self {
            TypeEntry::Triple(font, color, background)
            | TypeEntry::Fields {
                font,
                color,
                background,
            } => TypeSpec::new(font.as_str(), color.as_str(), background.as_str()),
        }
    }
}

/// Aliases and style types to register on top of the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub aliases: BTreeMap<String, String>,
    pub types: BTreeMap<String, TypeEntry>,
}

impl RegistryConfig {
    /// Parses a configuration document.
    ///
    /// An empty document yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid YAML or
    /// does not have the expected shape.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|source| ConfigError::Parse { source })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty() && self.types.is_empty()
    }
}
