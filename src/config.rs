//! Process configuration. Precedence: env > config file > defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::DbError;

/// File name looked up in the working directory when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "nexus_model.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_retention: Option<usize>,
}

impl Config {
    /// # Errors
    /// Returns an error if the text is not valid TOML for this structure.
    pub fn from_toml_str(s: &str) -> Result<Self, DbError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads `path` (or `nexus_model.toml` in the working directory when it exists),
    /// then applies `NEXUS_MODEL_LOG_DIR`, `NEXUS_MODEL_LOG_LEVEL` and
    /// `NEXUS_MODEL_LOG_RETENTION` on top.
    ///
    /// # Errors
    /// Returns an error if an explicit `path` cannot be read, or a config file fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Self, DbError> {
        let mut cfg = match path {
            Some(p) => Self::from_toml_str(&std::fs::read_to_string(p)?)?,
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_toml_str(&std::fs::read_to_string(&default)?)?
                } else {
                    Self::default()
                }
            }
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        Ok(cfg)
    }

    /// Overrides fields from `lookup`, which maps variable names to values.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("NEXUS_MODEL_LOG_DIR") {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(level) = lookup("NEXUS_MODEL_LOG_LEVEL") {
            self.log_level = Some(level);
        }
        if let Some(n) = lookup("NEXUS_MODEL_LOG_RETENTION").and_then(|s| s.parse::<usize>().ok()) {
            self.log_retention = Some(n);
        }
    }

    /// Installs the process logger described by this configuration.
    ///
    /// # Errors
    /// Returns an error if the log directory or appenders cannot be created.
    pub fn init_logging(&self) -> Result<(), DbError> {
        crate::logger::configure_logging(
            self.log_dir.as_deref(),
            self.log_level.as_deref(),
            self.log_retention,
        )
    }
}
