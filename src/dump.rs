//! Fire-and-forget dumps of arbitrary content to
//! `<home>/log/<module>/<unixEpochSeconds>.log`.

use crate::error::LogError;
use crate::logger::Logger;
use crate::paths;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Permission bits for dump files.
pub const DUMP_FILE_MODE: u32 = 0o644;

/// Write `content` to a fresh timestamp-named file under `<root>/<module_name>`.
///
/// A dump in the same second as a previous one for the same module replaces
/// it.
pub fn dump_in(
    root: &Path,
    module_name: &str,
    content: impl AsRef<[u8]>,
) -> Result<PathBuf, LogError> {
    let path = paths::prepare_log_file(root, module_name)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(DUMP_FILE_MODE);
    }
    let mut file = options.open(&path).map_err(|e| LogError::io(&path, e))?;
    file.write_all(content.as_ref())
        .map_err(|e| LogError::io(&path, e))?;

    debug!(path = %path.display(), module = %module_name, "Wrote dump file");
    Ok(path)
}

/// Dump through the default logger; failures go to its error level.
pub fn dump(module_name: &str, content: impl AsRef<[u8]>) {
    Logger::default().dump(module_name, content);
}

impl Logger {
    /// Dump under `<home>/log`. Failures are written at error level and
    /// never returned.
    pub fn dump(&self, module_name: &str, content: impl AsRef<[u8]>) {
        let result =
            paths::default_log_root().and_then(|root| dump_in(&root, module_name, content));
        self.report_dump(result);
    }

    /// Dump under `root` instead of `<home>/log`.
    pub fn dump_to(&self, root: &Path, module_name: &str, content: impl AsRef<[u8]>) {
        self.report_dump(dump_in(root, module_name, content));
    }

    fn report_dump(&self, result: Result<PathBuf, LogError>) {
        if let Err(err) = result {
            self.errorf(format_args!("dump failed: {err}"));
        }
    }
}
