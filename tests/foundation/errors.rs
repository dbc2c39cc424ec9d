//! Integration tests for the error types.

use alchemist_foundation::{Error, ErrorKind};

#[test]
fn readline_display() {
    let err = Error::readline("broken pipe");
    assert_eq!(format!("{err}"), "line editor: broken pipe");
}

#[test]
fn capacity_display_names_the_limit() {
    let err = Error::capacity_exceeded("formula components", 10);
    assert_eq!(format!("{err}"), "capacity exceeded: at most 10 formula components");
}

#[test]
fn kinds_are_matchable() {
    let err = Error::internal("bug");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
    let err = Error::capacity_exceeded("x", 1);
    assert!(matches!(err.kind, ErrorKind::CapacityExceeded { limit: 1, .. }));
}
