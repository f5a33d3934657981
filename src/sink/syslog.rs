//! Local syslog over the unix socket, RFC 3164 framing. The datagram socket
//! is tried first, then a stream socket with newline-terminated records.

use super::LogSink;
use crate::error::LogError;
use std::sync::Arc;

/// Facility `user` (1) with severity `notice` (5): `1 * 8 + 5`.
#[cfg(unix)]
pub const NOTICE_PRIORITY: u8 = 13;

/// Facility `user` (1) with severity `err` (3): `1 * 8 + 3`.
#[cfg(unix)]
pub const ERROR_PRIORITY: u8 = 11;

/// Socket paths tried in order.
#[cfg(unix)]
pub const SYSLOG_SOCKET_PATHS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

#[cfg(unix)]
pub use imp::SyslogSink;

#[cfg(unix)]
pub(super) fn open(process_name: &str) -> Result<Arc<dyn LogSink>, LogError> {
    Ok(Arc::new(SyslogSink::connect(process_name)?))
}

#[cfg(not(unix))]
pub(super) fn open(_process_name: &str) -> Result<Arc<dyn LogSink>, LogError> {
    use std::io;
    Err(LogError::Syslog(io::Error::new(
        io::ErrorKind::Unsupported,
        "system log destination requires a unix syslog socket",
    )))
}

#[cfg(unix)]
mod imp {
    use super::{LogSink, ERROR_PRIORITY, NOTICE_PRIORITY, SYSLOG_SOCKET_PATHS};
    use crate::error::LogError;
    use crate::format::LineFormat;
    use crate::level::Level;
    use std::io::{self, Write};
    use std::os::unix::net::{UnixDatagram, UnixStream};
    use std::path::Path;
    use tracing::debug;

    #[derive(Debug)]
    enum Socket {
        Datagram(UnixDatagram),
        Stream(UnixStream),
    }

    impl Socket {
        fn connect(path: &Path) -> io::Result<Self> {
            let datagram = UnixDatagram::unbound().and_then(|socket| {
                socket.connect(path)?;
                Ok(socket)
            });
            match datagram {
                Ok(socket) => Ok(Self::Datagram(socket)),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "Syslog datagram connect failed, trying stream");
                    let stream = UnixStream::connect(path)?;
                    Ok(Self::Stream(stream))
                }
            }
        }
    }

    /// One connection to the syslog socket at a fixed priority.
    #[derive(Debug)]
    struct Handle {
        socket: Socket,
        priority: u8,
    }

    impl Handle {
        fn connect(path: &Path, priority: u8) -> io::Result<Self> {
            Ok(Self {
                socket: Socket::connect(path)?,
                priority,
            })
        }

        fn send(&self, tag: &str, body: &str) -> io::Result<()> {
            let timestamp = chrono::Local::now().format("%b %e %H:%M:%S");
            let packet = format!(
                "<{}>{timestamp} {tag}[{}]: {body}",
                self.priority,
                std::process::id()
            );
            match &self.socket {
                Socket::Datagram(socket) => socket.send(packet.as_bytes()).map(|_| ()),
                // one write per record
                Socket::Stream(stream) => (&*stream).write_all(format!("{packet}\n").as_bytes()),
            }
        }
    }

    /// Sends normal levels at notice priority and fatal records at error
    /// priority, over two separate handles.
    #[derive(Debug)]
    pub struct SyslogSink {
        tag: String,
        notice: Handle,
        error: Handle,
    }

    impl SyslogSink {
        /// Connect to the first syslog socket that accepts a connection.
        pub fn connect(tag: &str) -> Result<Self, LogError> {
            let mut last_err = io::Error::new(io::ErrorKind::NotFound, "no syslog socket found");
            for path in SYSLOG_SOCKET_PATHS {
                match Self::connect_to(Path::new(path), tag) {
                    Ok(sink) => return Ok(sink),
                    Err(LogError::Syslog(e)) => last_err = e,
                    Err(other) => return Err(other),
                }
            }
            Err(LogError::Syslog(last_err))
        }

        /// Connect both handles to the socket at `path`.
        pub fn connect_to(path: &Path, tag: &str) -> Result<Self, LogError> {
            let notice = Handle::connect(path, NOTICE_PRIORITY).map_err(LogError::Syslog)?;
            let error = Handle::connect(path, ERROR_PRIORITY).map_err(LogError::Syslog)?;
            debug!(path = %path.display(), %tag, "Connected to syslog");
            Ok(Self {
                tag: tag.to_string(),
                notice,
                error,
            })
        }
    }

    impl LogSink for SyslogSink {
        fn write_record(&self, level: Level, message: &str) -> io::Result<()> {
            let handle = if level == Level::Fatal {
                &self.error
            } else {
                &self.notice
            };
            handle.send(&self.tag, &LineFormat::render_bare(level, message))
        }
    }

}
