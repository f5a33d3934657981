//! Logger settings loaded from TOML and environment variables.
//!
//! Every field is optional; an empty file or a missing file yields
//! `Warn` to stdout.

use crate::destination::Destination;
use crate::error::LogError;
use crate::level::Level;
use crate::logger::{Logger, LoggerBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_LEVEL: &str = "LEVELOG_LEVEL";
pub const ENV_DESTINATION: &str = "LEVELOG_DESTINATION";
pub const ENV_ROOT: &str = "LEVELOG_ROOT";
pub const ENV_PROCESS_NAME: &str = "LEVELOG_PROCESS_NAME";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    pub level: Level,
    pub destination: Destination,
    /// Replaces `<home>/log` for the file destination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_root: Option<PathBuf>,
    /// Replaces the name derived from argv[0].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
}

impl LogSettings {
    pub fn from_toml_str(content: &str) -> Result<Self, LogError> {
        toml::from_str(content).map_err(|e| LogError::Settings(e.to_string()))
    }

    /// Load settings from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, LogError> {
        if !path.exists() {
            debug!("Log settings not found at {}; using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| LogError::io(path, e))?;
        let settings = Self::from_toml_str(&content)?;
        debug!("Loaded log settings from {}", path.display());
        Ok(settings)
    }

    /// Apply `LEVELOG_*` environment variables on top of these settings.
    pub fn with_env_overrides(self) -> Result<Self, LogError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which maps a `LEVELOG_*` variable name
    /// to its value. Empty values are ignored.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, LogError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(level) = get(ENV_LEVEL) {
            self.level = level
                .parse::<Level>()
                .map_err(|e| LogError::Settings(e.to_string()))?;
        }
        if let Some(destination) = get(ENV_DESTINATION) {
            self.destination = destination
                .parse::<Destination>()
                .map_err(|e| LogError::Settings(e.to_string()))?;
        }
        if let Some(root) = get(ENV_ROOT) {
            self.log_root = Some(PathBuf::from(root));
        }
        if let Some(name) = get(ENV_PROCESS_NAME) {
            self.process_name = Some(name);
        }
        Ok(self)
    }

    #[must_use]
    pub fn builder(&self) -> LoggerBuilder {
        let mut builder = Logger::builder()
            .threshold(self.level)
            .destination(self.destination);
        if let Some(root) = &self.log_root {
            builder = builder.log_root(root.clone());
        }
        if let Some(name) = &self.process_name {
            builder = builder.process_name(name.clone());
        }
        builder
    }

    /// Build a logger, falling back to the default logger on setup failure.
    #[must_use]
    pub fn configure(&self) -> Logger {
        Logger::default().reconfigure_with(self.builder())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
