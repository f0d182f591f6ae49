//! Configuration for Learnboard
//!
//! Centralized configuration with sensible defaults. Values come from, in
//! increasing precedence: `Default`, an optional TOML file, and command-line
//! flags applied through the builder.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::model::UserId;

/// Main configuration for a Learnboard instance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    // -------------------------------------------------------------------------
    // Identity Configuration
    // -------------------------------------------------------------------------
    /// Identity every request acts as (there is no authentication)
    pub user_id: UserId,

    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Populate the store with fixture data at start-up
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5000".to_string(),
            user_id: 1,
            seed: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load a config from a TOML file
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Start from an existing config (e.g. one loaded from a file)
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the identity requests act as
    pub fn user_id(mut self, id: UserId) -> Self {
        self.config.user_id = id;
        self
    }

    /// Enable or disable fixture seeding
    pub fn seed(mut self, seed: bool) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
