//! Log directory layout: `<root>/<name>/<unixEpochSeconds>.log`, where the
//! default root is `<home>/log`.

use crate::error::LogError;
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Directory under the home directory that holds all log folders.
pub const LOG_DIR_NAME: &str = "log";

/// Extension of every file written by this crate.
pub const LOG_EXTENSION: &str = "log";

/// `<home>/log`.
pub fn default_log_root() -> Result<PathBuf, LogError> {
    dirs::home_dir()
        .map(|home| home.join(LOG_DIR_NAME))
        .ok_or(LogError::HomeDirNotFound)
}

/// `<root>/<name>`.
///
/// Only the plain components of `name` are kept: a leading `/`, `.` and `..`
/// are dropped, so the result always stays under `root`.
pub fn named_dir(root: &Path, name: &str) -> Result<PathBuf, LogError> {
    let relative: PathBuf = Path::new(name)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();
    if relative.as_os_str().is_empty() {
        return Err(LogError::InvalidName(name.to_string()));
    }
    Ok(root.join(relative))
}

/// Seconds since the Unix epoch, or 0 if the clock is set before it.
#[must_use]
pub fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[must_use]
pub fn epoch_file_name(seconds: u64) -> String {
    format!("{seconds}.{LOG_EXTENSION}")
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), LogError> {
    std::fs::create_dir_all(dir).map_err(|e| LogError::io(dir, e))
}

/// Resolve and create `<root>/<name>`, returning the path of a fresh
/// timestamp-named file inside it. The file itself is not created.
pub fn prepare_log_file(root: &Path, name: &str) -> Result<PathBuf, LogError> {
    let dir = named_dir(root, name)?;
    ensure_dir(&dir)?;
    Ok(dir.join(epoch_file_name(epoch_seconds())))
}
