//! Session settings.
//!
//! Settings layer three sources, later ones winning: built-in defaults, an
//! optional TOML file, and `CALTRACK_`-prefixed environment variables.
//! Command-line flags are applied on top by the presentation layer.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Tunable settings for a tracking session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Budget applied when the session starts. Kept as raw text and
    /// normalized like any other form value.
    pub default_budget: Option<String>,
    /// Whether report output uses color.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_budget: None,
            color: true,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings, reading `path` as a TOML file when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default("color", true)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("CALTRACK"))
            .build()?
            .try_deserialize()
    }

    /// Set the starting budget.
    pub fn with_default_budget(mut self, raw: impl Into<String>) -> Self {
        self.default_budget = Some(raw.into());
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
