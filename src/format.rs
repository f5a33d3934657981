use crate::level::Level;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::OnceLock;

/// Timestamp layout written at the start of every console and file line.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Name used when argv[0] is missing or has no file name.
pub const FALLBACK_PROCESS_NAME: &str = "process";

/// Process-wide line format, fixed by the first logger that is configured.
static LINE_FORMAT: OnceLock<LineFormat> = OnceLock::new();

/// How records are rendered into text lines.
#[derive(Debug)]
pub struct LineFormat {
    process_name: String,
    timestamp_format: &'static str,
}

impl LineFormat {
    /// The shared format, initialized once on first use.
    pub fn global() -> &'static Self {
        LINE_FORMAT.get_or_init(|| {
            let process_name = std::env::args_os()
                .next()
                .map_or_else(|| FALLBACK_PROCESS_NAME.to_string(), |arg0| process_name_from(&arg0));
            tracing::debug!(%process_name, "Initialized log line format");
            Self {
                process_name,
                timestamp_format: TIMESTAMP_FORMAT,
            }
        })
    }

    /// Name of the running executable, used for the file destination
    /// directory and the syslog tag.
    #[must_use]
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// `<timestamp> [<LEVEL>] <message>`, newline terminated.
    #[must_use]
    pub fn render(&self, level: Level, message: &str) -> String {
        let timestamp = chrono::Local::now().format(self.timestamp_format);
        format!("{timestamp} [{level}] {message}\n")
    }

    /// `[<LEVEL>] <message>` without timestamp, for sinks that stamp records
    /// themselves.
    #[must_use]
    pub fn render_bare(level: Level, message: &str) -> String {
        format!("[{level}] {message}")
    }
}

/// Base name of `arg0` with spaces replaced by underscores.
#[must_use]
pub fn process_name_from(arg0: &OsStr) -> String {
    let name = Path::new(arg0)
        .file_name()
        .map(|n| n.to_string_lossy().replace(' ', "_"))
        .unwrap_or_default();
    if name.is_empty() {
        FALLBACK_PROCESS_NAME.to_string()
    } else {
        name
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
