use crate::error::AidvisorsError;

use client_core::error::ConfigError;

use common::ErrorLocation;

use std::io;
use std::panic::Location;

#[test]
fn given_request_error_when_displayed_then_kind_message_and_location_shown() {
    let err = AidvisorsError::Request {
        message: String::from("Failed to fetch budgets: boom"),
        location: ErrorLocation::from(Location::caller()),
    };

    let shown = err.to_string();

    assert!(shown.starts_with("Request Error: Failed to fetch budgets: boom ["));
    assert!(shown.contains("error.rs:"));
    assert_eq!(err.message(), "Failed to fetch budgets: boom");
}

/// **VALUE**: Config failures keep their own description when surfaced by the CLI.
///
/// **BUG THIS CATCHES**: Would catch a `From` impl that drops the reason, leaving
/// the user with a bare "Core Error" and nothing to act on.
#[test]
fn given_config_validation_error_when_converted_then_reason_kept() {
    // GIVEN: A validation error from client-core
    let config_err = ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: String::from("API base URL cannot be empty"),
    };

    // WHEN: Converting to the CLI error
    let err = AidvisorsError::from(config_err);

    // THEN: It is a Core error carrying the reason
    assert!(matches!(err, AidvisorsError::Core { .. }));
    assert!(err.message().contains("API base URL cannot be empty"));
}

#[test]
fn given_io_error_when_converted_then_output_error() {
    let err = AidvisorsError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));

    assert!(matches!(err, AidvisorsError::Output { .. }));
    assert_eq!(err.message(), "pipe closed");
}
