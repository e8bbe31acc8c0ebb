//! CLI configuration: built-in defaults, an optional TOML file, then
//! `CHECKWORD_*` environment variables. Command-line flags are applied on
//! top by the caller.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checkword_core::SearchStrategy;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "CHECKWORD";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Wordlist language tag; unknown tags fall back to English.
    pub language: String,
    /// Log level filter string (e.g. "warn", "checkword_core=trace").
    pub log_level: String,
    pub log_format: LogFormat,
    pub search_strategy: SearchStrategy,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
            search_strategy: SearchStrategy::Direct,
        }
    }
}

impl CliConfig {
    /// `<config dir>/checkword/config.toml`, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("checkword").join("config.toml"))
    }

    /// Load from `path` (required) or the default path (optional), then
    /// the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`CliConfig::load`], reading variables from `env` instead of
    /// the process environment when given.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self> {
        let mut builder = config::Config::builder();

        match path {
            Some(p) => {
                builder = builder.add_source(config::File::from(p.to_path_buf()).required(true));
            }
            None => {
                if let Some(p) = Self::default_path() {
                    builder = builder.add_source(config::File::from(p).required(false));
                }
            }
        }

        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).source(env));

        let settings = builder.build().context("Failed to read configuration")?;
        settings
            .try_deserialize()
            .context("Invalid configuration")
    }
}
