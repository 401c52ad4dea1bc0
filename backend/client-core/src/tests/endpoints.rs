// Unit tests for endpoint assembly
// Wire-level checks against a mock server live in integration_tests/api_client

use crate::api_client::endpoints::{
    CATEGORY_ID_PARAM, TRANSACTIONS_ENDPOINT, USER_ID_PARAM, compose_url, with_query,
};
use crate::error::ApiErrorKind;

/// **VALUE**: Covers every filter combination of the transactions endpoint.
///
/// **WHY THIS MATTERS**: The server only understands `?a=1&b=2`. A stray `&` or a
/// second `?` turns the filter into part of another parameter's value.
///
/// **BUG THIS CATCHES**: Would catch a separator that is not reset per call, or one
/// that is emitted for an absent filter.
#[test]
fn given_filter_combinations_when_building_query_then_uses_exact_separators() {
    let build = |user, category| {
        with_query(
            TRANSACTIONS_ENDPOINT,
            &[(USER_ID_PARAM, user), (CATEGORY_ID_PARAM, category)],
        )
    };

    assert_eq!(build(None, None), "transactions");
    assert_eq!(build(Some(1), None), "transactions?user_id=1");
    assert_eq!(build(None, Some(7)), "transactions?category_id=7");
    assert_eq!(build(Some(1), Some(7)), "transactions?user_id=1&category_id=7");
}

#[test]
fn given_negative_id_when_building_query_then_value_is_rendered_verbatim() {
    assert_eq!(
        with_query("budgets", &[(USER_ID_PARAM, Some(-3))]),
        "budgets?user_id=-3"
    );
}

/// **VALUE**: The `/api` prefix of the base URL must survive URL composition.
///
/// **BUG THIS CATCHES**: Would catch a switch to `Url::join`, which silently drops
/// the last segment of a base URL without a trailing slash.
#[test]
fn given_base_with_path_when_composing_then_keeps_path_prefix() {
    let url = compose_url("http://localhost:5000/api", "budgets?user_id=1").unwrap();

    assert_eq!(url.as_str(), "http://localhost:5000/api/budgets?user_id=1");
}

#[test]
fn given_base_with_trailing_slash_when_composing_then_no_double_slash() {
    let url = compose_url("http://localhost:5000/api/", "categories").unwrap();

    assert_eq!(url.as_str(), "http://localhost:5000/api/categories");
}

#[test]
fn given_garbage_base_when_composing_then_invalid_url() {
    let err = compose_url("not a url", "budgets").unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::InvalidUrl);
}

#[test]
fn given_non_http_scheme_when_composing_then_invalid_url() {
    let err = compose_url("ftp://example.com/api", "budgets").unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::InvalidUrl);
    assert!(err.to_string().contains("ftp"));
}
