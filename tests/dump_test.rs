#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{capturing_logger, create_test_dir, files_in};
use levelog::{dump_in, Level};

#[test]
fn test_dump_creates_exactly_one_file_with_payload() {
    let temp = create_test_dir();
    let (logger, capture) = capturing_logger(Level::All);

    logger.dump_to(temp.path(), "mod", "payload");

    let files = files_in(&temp.path().join("mod"));
    assert_eq!(files.len(), 1);
    assert_eq!(std::fs::read(&files[0]).unwrap(), b"payload");
    assert!(capture.text().is_empty(), "no error expected");
}

#[test]
fn test_dump_binary_content() {
    let temp = create_test_dir();
    let bytes: Vec<u8> = (0..=255).collect();
    let path = dump_in(temp.path(), "blob", &bytes).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), bytes);
}

#[test]
fn test_dump_failure_goes_to_error_level() {
    let temp = create_test_dir();
    let blocker = temp.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();

    let (logger, capture) = capturing_logger(Level::Error);
    logger.dump_to(&blocker, "mod", "payload");

    assert!(capture.text().contains("[ERROR] dump failed"));
}

#[test]
fn test_dump_failure_is_silent_when_errors_suppressed() {
    let temp = create_test_dir();
    let blocker = temp.path().join("occupied");
    std::fs::write(&blocker, "not a directory").unwrap();

    let (logger, capture) = capturing_logger(Level::Fatal);
    logger.dump_to(&blocker, "mod", "payload");

    assert!(capture.text().is_empty());
}
