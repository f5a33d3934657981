use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity threshold and message level.
///
/// Variants are declared in rank order, so the derived `Ord` is the rank
/// comparison: `All` is the most permissive threshold and `Off` suppresses
/// everything.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    All,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Fatal,
    Off,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown log level '{0}' (expected all, debug, info, warn, error, fatal or off)")]
pub struct ParseLevelError(pub String);

impl Level {
    /// Every level, lowest rank first.
    pub const ALL_LEVELS: [Self; 7] = [
        Self::All,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Off,
    ];

    /// Numeric rank used for threshold comparison.
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether a message at `self` passes a logger configured with `threshold`.
    ///
    /// `Off` as a threshold rejects everything, and a message can never be
    /// logged "at" `Off`.
    #[must_use]
    pub fn passes(self, threshold: Self) -> bool {
        threshold != Self::Off && self != Self::Off && self >= threshold
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "off" | "none" => Ok(Self::Off),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, ParseLevelError> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_lowercase()
    }
}
