use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Could not determine the current user's home directory")]
    HomeDirNotFound,

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to connect to the system log: {0}")]
    Syslog(#[source] std::io::Error),

    #[error("Invalid log settings: {0}")]
    Settings(String),

    #[error("Log folder name '{0}' has no usable path component")]
    InvalidName(String),
}

impl LogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
