//! Interop configuration
//!
//! Loaded from TOML. Every section is optional:
//!
//! ```toml
//! [entry_points]
//! setup = "ChartSetup.Setup"
//!
//! [serializer]
//! naming = "lower-camel"
//! nulls = "ignore"
//!
//! [diagnostics]
//! trace_payloads = true
//! ```

use crate::entry_points;
use crate::error::Result;
use chartbridge_core::{NullHandling, SerializerConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteropConfig {
    pub entry_points: EntryPoints,
    /// Settings for the setup payload
    pub serializer: SerializerConfig,
    pub diagnostics: Diagnostics,
}

/// Names of the foreign functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryPoints {
    pub setup: String,
    pub update: String,
    pub string_rep: String,
}

impl Default for EntryPoints {
    fn default() -> Self {
        Self {
            setup: entry_points::SETUP.to_string(),
            update: entry_points::UPDATE.to_string(),
            string_rep: entry_points::STRING_REP.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Diagnostics {
    /// Log the direct graph and the final payload through the diagnostic
    /// entry point before each setup
    pub trace_payloads: bool,
}

impl InteropConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializer settings for the setup path
    pub fn serializer_config(&self) -> SerializerConfig {
        self.serializer.clone()
    }

    /// Serializer settings for the update path: same naming, nulls kept
    pub fn update_serializer_config(&self) -> SerializerConfig {
        self.serializer.clone().with_nulls(NullHandling::Include)
    }
}
