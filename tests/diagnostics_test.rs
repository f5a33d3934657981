#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Installs the global subscriber, so it lives in its own test binary.

use levelog::{init_diagnostics, DiagnosticsConfig, Level, Logger};

#[test]
fn test_init_once_then_second_init_fails() {
    let config = DiagnosticsConfig {
        json_format: true,
        ..DiagnosticsConfig::default()
    };
    init_diagnostics(&config).expect("first init");
    assert!(init_diagnostics(&DiagnosticsConfig::default()).is_err());

    // logging still works with the subscriber installed
    let logger = Logger::builder().threshold(Level::Off).build().unwrap();
    assert!(logger.fatal("ignored").is_none());
}
