//! Tests for the crate error type.

use super::error::Error;

#[test]
fn test_capacity_exceeded_display() {
    let err = Error::CapacityExceeded {
        name: "Wire#0".to_string(),
        capacity: 2,
    };
    assert_eq!(err.to_string(), "vertex \"Wire#0\" cannot have more than 2 edges");
    assert!(err.is_capacity_exceeded());
}

#[test]
fn test_config_display() {
    let err = Error::Config("missing field".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing field");
    assert!(!err.is_capacity_exceeded());
}

#[test]
fn test_from_figment_error() {
    let err: Error = figment::Error::from("bad value".to_string()).into();
    assert!(matches!(err, Error::Config(msg) if msg.contains("bad value")));
}
