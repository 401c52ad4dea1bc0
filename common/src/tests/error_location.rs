use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Error messages across the workspace end with `[file:line:col]`.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops the brackets or
/// the column, which makes logged errors much harder to trace.
#[test]
fn given_location_when_displayed_then_formats_file_line_column() {
    // GIVEN: A location pointing at this test
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting it
    let rendered = location.to_string();

    // THEN: The bracketed file:line:col form is produced
    assert!(rendered.starts_with('['));
    assert!(rendered.ends_with(']'));
    assert!(rendered.contains("error_location.rs"));
    assert_eq!(
        rendered,
        format!("[{}:{}:{}]", location.file, location.line, location.column)
    );
}

#[track_caller]
fn capture() -> ErrorLocation {
    ErrorLocation::caller()
}

#[test]
fn given_track_caller_helper_when_capturing_then_points_at_call_site() {
    let expected_line = line!() + 1;
    let location = capture();

    assert_eq!(location.line, expected_line);
    assert!(location.file.ends_with("error_location.rs"));
}
