#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{capturing_logger, create_test_dir, files_in, Capture};
use levelog::{configure, Destination, Level, Logger};

#[test]
fn test_debug_visible_at_all_then_hidden_at_error() {
    let capture = Capture::default();
    let logger = Logger::builder()
        .threshold(Level::All)
        .destination(Destination::Stdout)
        .writer(capture.clone())
        .build()
        .unwrap();

    logger.debug("x");
    let lines = capture.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with('x'));

    let quieter = logger.reconfigure_with(
        Logger::builder()
            .threshold(Level::Error)
            .destination(Destination::Stdout)
            .writer(capture.clone()),
    );
    quieter.debug("x");
    assert_eq!(capture.lines().len(), 1, "debug must be dropped at ERROR");
}

#[test]
fn test_every_threshold_against_every_level() {
    let levels = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];
    for threshold in Level::ALL_LEVELS {
        let (logger, capture) = capturing_logger(threshold);
        logger.debug("debug");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        let exit = logger.fatal("fatal");

        let text = capture.text();
        for level in levels {
            let shown = text.contains(&format!("[{level}] "));
            let expected = threshold != Level::Off && level >= threshold;
            assert_eq!(shown, expected, "level {level} at threshold {threshold}");
        }
        assert_eq!(exit.is_some(), threshold != Level::Off);
    }
}

#[test]
fn test_off_suppresses_fatal_and_its_exit() {
    let (logger, capture) = capturing_logger(Level::Off);
    assert!(logger.fatal("nothing to see").is_none());
    assert!(levelog::fatalf!(logger, "code {}", 3).is_none());
    assert!(capture.text().is_empty());
}

#[test]
fn test_reconfigure_moves_output_to_new_destination() {
    let temp = create_test_dir();
    let root = temp.path();

    let to_file = Logger::builder()
        .threshold(Level::Info)
        .destination(Destination::File)
        .log_root(root)
        .process_name("svc")
        .build()
        .unwrap();
    to_file.info("first");

    let files = files_in(&root.join("svc"));
    assert_eq!(files.len(), 1);
    let before = std::fs::read_to_string(&files[0]).unwrap();
    assert!(before.contains("[INFO] first"));

    let capture = Capture::default();
    let to_writer = to_file.reconfigure_with(
        Logger::builder()
            .threshold(Level::Info)
            .writer(capture.clone()),
    );
    to_writer.info("second");

    assert!(capture.text().contains("[INFO] second"));
    let after = std::fs::read_to_string(&files[0]).unwrap();
    assert_eq!(before, after, "old destination must not receive new records");
}

#[test]
fn test_configure_stdout_and_stderr() {
    let out = configure(Level::Info, Destination::Stdout);
    let err = configure(Level::Debug, Destination::Stderr);
    assert_eq!(out.destination(), Destination::Stdout);
    assert_eq!(err.destination(), Destination::Stderr);
    assert!(err.enabled(Level::Debug));
    assert!(!out.enabled(Level::Debug));
}

#[test]
fn test_formatted_macros() {
    let (logger, capture) = capturing_logger(Level::Debug);
    levelog::debugf!(logger, "a={}", 1);
    levelog::infof!(logger, "b={}", 2);
    levelog::warnf!(logger, "c={}", 3);
    levelog::errorf!(logger, "retry {}/{} failed", 2, 5);

    let lines = capture.lines();
    assert!(lines[0].ends_with("[DEBUG] a=1"));
    assert!(lines[1].ends_with("[INFO] b=2"));
    assert!(lines[2].ends_with("[WARN] c=3"));
    assert!(lines[3].ends_with("[ERROR] retry 2/5 failed"));
}
