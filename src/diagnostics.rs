//! Subscriber setup for the crate's own `tracing` diagnostics.
//!
//! The library only emits `tracing` events (sink opened, setup fell back,
//! record dropped). Binaries that want to see them call
//! [`init_diagnostics`] once at startup.

use tracing::Level;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
};

/// Configuration for the diagnostics subscriber.
#[derive(Debug, Clone)]
pub struct DiagnosticsConfig {
    /// Level for the `levelog` target when `RUST_LOG` is not set.
    pub default_level: Level,
    /// Emit JSON lines instead of human-readable text.
    pub json_format: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            json_format: false,
        }
    }
}

impl DiagnosticsConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("levelog={}", self.default_level)
    }
}

/// Install a global subscriber writing diagnostics to stderr.
///
/// Fails if a global subscriber is already installed.
pub fn init_diagnostics(config: &DiagnosticsConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    if config.json_format {
        let json_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_filter(env_filter);
        tracing_subscriber::registry()
            .with(json_layer)
            .with(ErrorLayer::default())
            .try_init()
    } else {
        let text_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_ansi(true)
            .with_filter(env_filter);
        tracing_subscriber::registry()
            .with(text_layer)
            .with(ErrorLayer::default())
            .try_init()
    }
}
