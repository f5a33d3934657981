use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a logger sends its records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
    /// `<home>/log/<process>/<epoch>.log`, teed to stdout.
    File,
    /// Local syslog daemon.
    SystemLog,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown log destination '{0}' (expected stdout, stderr, file or syslog)")]
pub struct ParseDestinationError(pub String);

impl Destination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
            Self::File => "file",
            Self::SystemLog => "syslog",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Destination {
    type Err = ParseDestinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            "file" => Ok(Self::File),
            "syslog" | "system_log" | "systemlog" => Ok(Self::SystemLog),
            _ => Err(ParseDestinationError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Destination {
    type Error = ParseDestinationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Destination> for String {
    fn from(destination: Destination) -> Self {
        destination.as_str().to_string()
    }
}
