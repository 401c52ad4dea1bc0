use crate::HttpStatusCode;

/// **VALUE**: Pins the failure boundary the API client relies on.
///
/// **BUG THIS CATCHES**: An off-by-one (`> 400`) would let a 400 Bad Request from
/// a rejected create fall through to JSON decoding.
#[test]
fn given_status_codes_around_400_when_checking_failure_then_boundary_is_inclusive() {
    assert!(!HttpStatusCode(200).is_failure());
    assert!(!HttpStatusCode(399).is_failure());
    assert!(HttpStatusCode(400).is_failure());
    assert!(HttpStatusCode(500).is_failure());
}

#[test]
fn given_status_code_when_displayed_then_prints_bare_number() {
    assert_eq!(HttpStatusCode::from(500).to_string(), "500");
    assert_eq!(HttpStatusCode::from(201).as_u16(), 201);
}
