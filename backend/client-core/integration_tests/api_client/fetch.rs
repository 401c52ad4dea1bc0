use crate::helpers::{api_path, client_for, groceries_budget, received, transaction_json};

use models::Decimal;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: A filtered budgets fetch hits `/budgets?user_id=N` and decodes the envelope.
///
/// **WHY THIS MATTERS**: This is the first request the budgets screen makes. A wrong
/// path or query means the screen shows another user's budgets or none at all.
///
/// **BUG THIS CATCHES**: Would catch a lost `/api` prefix, a malformed query string,
/// or a decoding mismatch on the envelope key.
#[tokio::test]
async fn given_user_filter_when_fetching_budgets_then_sends_query_and_decodes() {
    // GIVEN: A server with one budget
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("budgets")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "budgets": [groceries_budget()] })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Fetching budgets for user 1
    let response = client.fetch_budgets(Some(1)).await.unwrap();

    // THEN: The query is exact and the budget decoded
    let requests = received(&server).await;
    assert_eq!(requests[0].url.query(), Some("user_id=1"));
    assert_eq!(response.budgets.len(), 1);
    assert_eq!(response.budgets[0].name, "Groceries");
    assert_eq!(response.budgets[0].amount, Decimal::new(500, 0));
}

#[tokio::test]
async fn given_no_filter_when_fetching_budgets_then_path_is_bare() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("budgets")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "budgets": [] })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let response = client.fetch_budgets(None).await.unwrap();

    let requests = received(&server).await;
    assert_eq!(requests[0].url.query(), None);
    assert!(response.budgets.is_empty());
}

/// **VALUE**: Exercises the only endpoint with two optional filters, end to end.
///
/// **BUG THIS CATCHES**: Would catch filters being emitted in the wrong order or
/// joined with the wrong separator on the actual wire.
#[tokio::test]
async fn given_filter_combinations_when_fetching_transactions_then_query_forms_are_exact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction_json(1, -12.5, Some("Coffee"), Some(4))]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    client.fetch_transactions(None, None).await.unwrap();
    client.fetch_transactions(Some(1), None).await.unwrap();
    client.fetch_transactions(None, Some(4)).await.unwrap();
    let response = client.fetch_transactions(Some(1), Some(4)).await.unwrap();

    let queries: Vec<Option<String>> = received(&server)
        .await
        .iter()
        .map(|r| r.url.query().map(String::from))
        .collect();
    assert_eq!(
        queries,
        vec![
            None,
            Some(String::from("user_id=1")),
            Some(String::from("category_id=4")),
            Some(String::from("user_id=1&category_id=4")),
        ]
    );
    assert_eq!(response.transactions[0].description.as_deref(), Some("Coffee"));
    assert_eq!(response.transactions[0].amount, Decimal::new(-125, 1));
}

#[tokio::test]
async fn given_budget_filter_when_fetching_categories_then_decodes_planned_amounts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("categories")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [
                {"id": 3, "name": "Produce", "planned_amount": 120.0, "budget_id": 1},
                {"id": 4, "name": "Snacks", "planned_amount": 30.5, "budget_id": 1}
            ]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let response = client.fetch_categories(Some(1)).await.unwrap();

    assert_eq!(received(&server).await[0].url.query(), Some("budget_id=1"));
    assert_eq!(response.categories.len(), 2);
    assert_eq!(response.categories[1].planned_amount, Decimal::new(305, 1));
}

#[tokio::test]
async fn given_users_endpoints_when_fetching_then_list_and_single_user_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("users")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{"id": 1, "username": "demo", "email": "demo@example.com"}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("users/1")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "username": "demo",
            "email": "demo@example.com",
            "created_at": "2025-01-01T09:30:00"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let users = client.fetch_users().await.unwrap();
    let user = client.fetch_user(1).await.unwrap();

    assert_eq!(users.users[0].username, "demo");
    assert_eq!(users.users[0].created_at, None);
    assert_eq!(user.created_at.as_deref(), Some("2025-01-01T09:30:00"));
}

#[tokio::test]
async fn given_healthy_server_when_checking_health_then_reports_healthy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("health")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "timestamp": "2025-01-01T00:00:00"
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let health = client.health_check().await.unwrap();

    assert!(health.is_healthy());
}
