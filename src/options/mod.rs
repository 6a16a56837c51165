//! Rail options with TOML file support.
//!
//! Options serialize to/from TOML. Every section uses `#[serde(default)]`
//! so partial files (e.g. only overriding `[rail]`) work.

mod rail;

use std::path::Path;

pub use rail::RailOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RailkitError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Navigation rail parameters.
    pub rail: RailOptions,
}

impl Options {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RailkitError> {
        let content =
            std::fs::read_to_string(path).map_err(RailkitError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, RailkitError> {
        toml::from_str(content)
            .map_err(|e| RailkitError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RailkitError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RailkitError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RailkitError::Io)?;
        }
        std::fs::write(path, content).map_err(RailkitError::Io)
    }
}
