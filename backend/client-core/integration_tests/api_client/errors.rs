use crate::helpers::{UNREACHABLE_BASE_URL, api_path, client_for, received};

use client_core::ApiClient;
use client_core::error::ApiErrorKind;

use models::{Decimal, NewTransaction};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: HTTP status is classified before the body is touched.
///
/// **WHY THIS MATTERS**: Error pages are rarely JSON. If decoding ran first, every
/// server crash would be reported as a decoding bug in the client.
///
/// **BUG THIS CATCHES**: Would catch reordering the status check after decoding.
#[tokio::test]
async fn given_500_with_unparseable_body_when_fetching_then_server_error_not_decoding() {
    // GIVEN: A server failing with an HTML error page
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("budgets")))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Internal Error</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching budgets
    let err = client.fetch_budgets(Some(1)).await.unwrap_err();

    // THEN: The failure is the status, not the body
    assert_eq!(err.kind(), ApiErrorKind::Server(500));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn given_400_on_create_when_posting_then_server_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("transactions")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad date"})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let body = NewTransaction::new(Decimal::new(5, 0), "yesterday", 1);
    let err = client.create_transaction(&body).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Server(400));
}

#[tokio::test]
async fn given_200_with_unparseable_body_when_fetching_then_decoding_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("categories")))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.fetch_categories(None).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Decoding);
}

/// **VALUE**: Well-formed JSON of the wrong shape is still a decoding failure.
///
/// **BUG THIS CATCHES**: Would catch envelopes that silently default a missing list
/// to empty, hiding a server contract change behind an empty screen.
#[tokio::test]
async fn given_wrong_envelope_key_when_fetching_then_decoding_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.fetch_transactions(Some(1), None).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Decoding);
}

#[tokio::test]
async fn given_nothing_listening_when_fetching_then_request_failed() {
    let client = ApiClient::new(UNREACHABLE_BASE_URL).unwrap();

    let err = client.fetch_budgets(Some(1)).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::RequestFailed);
    assert!(std::error::Error::source(&err).is_some());
}

/// **VALUE**: A malformed base URL fails before any I/O happens.
///
/// **BUG THIS CATCHES**: Would catch URL problems being reported as transport
/// failures, which point users at their network instead of their settings.
#[tokio::test]
async fn given_malformed_base_url_when_fetching_then_invalid_url_and_no_request() {
    let server = MockServer::start().await;
    let client = ApiClient::new("localhost api").unwrap();

    let err = client.fetch_budgets(None).await.unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::InvalidUrl);
    assert!(received(&server).await.is_empty());
}
