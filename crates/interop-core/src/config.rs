use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::base::{Base, NumberFormat};
use crate::errors::{ErrorInfo, InteropError};

/// YAML-configurable settings held by a serializer instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonConfig {
    /// Radix used when encoding integer fields and compact floats.
    #[serde(default)]
    pub numeral_base: Base,
    /// Whether floats are written as decimal text instead of bit patterns.
    #[serde(default = "default_legible_floats")]
    pub legible_floats: bool,
    /// Whether registrations also install short class tags.
    #[serde(default = "default_add_class_tags")]
    pub add_class_tags: bool,
}

fn default_legible_floats() -> bool {
    true
}

fn default_add_class_tags() -> bool {
    true
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            numeral_base: Base::BASE10,
            legible_floats: default_legible_floats(),
            add_class_tags: default_add_class_tags(),
        }
    }
}

impl JsonConfig {
    /// Parses a YAML document; absent keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, InteropError> {
        serde_yaml::from_str(yaml).map_err(|err| {
            InteropError::Config(ErrorInfo::new("yaml-deserialize", err.to_string()))
        })
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InteropError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            InteropError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Serializes the configuration back to YAML.
    pub fn to_yaml_string(&self) -> Result<String, InteropError> {
        serde_yaml::to_string(self)
            .map_err(|err| InteropError::Config(ErrorInfo::new("yaml-serialize", err.to_string())))
    }

    /// The number format implied by the current settings.
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.numeral_base, self.legible_floats)
    }
}
