//! Layered configuration.
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. TOML file (`netlist.toml` in the working directory unless a path is given)
//! 3. Environment variables prefixed with `NETLIST_`, nested with `__`
//!    (e.g. `NETLIST_GRAPH__EDGE_MODE=bidirectional`)
//!
//! A missing file is not an error; the defaults apply.
//!
//! # Example
//!
//! ```toml
//! [graph]
//! edge_mode = "bidirectional"
//!
//! [output]
//! format = "json"
//! ```

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::EdgeMode;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "netlist.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "NETLIST_";

/// Graph construction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// How connections are stored.
    pub edge_mode: EdgeMode,
}

/// Rendering format of a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Netlist text trace.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rendering format.
    pub format: OutputFormat,
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetlistConfig {
    /// Graph settings.
    pub graph: GraphConfig,
    /// Output settings.
    pub output: OutputConfig,
}

impl NetlistConfig {
    /// Loads configuration from [`DEFAULT_CONFIG_FILE`] and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Loads configuration from `path` and the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Self = Self::figment(path).extract()?;
        tracing::debug!(path = %path.display(), ?config, "Configuration loaded");
        Ok(config)
    }

    /// Parses configuration from a TOML string, without environment overrides.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?)
    }

    /// Serializes this configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::error::Error::Config(e.to_string()))
    }

    fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
