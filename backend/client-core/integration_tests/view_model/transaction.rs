use crate::helpers::{api_path, client_for, received, transaction_json};

use client_core::view_model::TransactionViewModel;

use models::Decimal;

use std::time::Duration;

use chrono::NaiveDate;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn march_14() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// **VALUE**: An expense entered as 42.50 without description is sent negated,
/// with no `description` key, and lands at the end of the list.
///
/// **WHY THIS MATTERS**: Users type positive numbers; the sign comes from the
/// expense toggle. Getting this wrong books expenses as income.
///
/// **BUG THIS CATCHES**: Would catch a missing negation, a `null` description, or
/// the created transaction being dropped instead of appended.
#[tokio::test]
async fn given_expense_without_description_when_creating_then_negated_and_appended() {
    // GIVEN: A list that already has one transaction
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction_json(1, 1200.0, Some("Salary"), None)]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(api_path("transactions")))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(transaction_json(2, -42.5, None, None)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let view_model = TransactionViewModel::new(client_for(&server));
    view_model.fetch_transactions(None).await;

    // WHEN: Creating the expense
    view_model
        .create_transaction(Decimal::new(4250, 2), None, march_14(), None, true)
        .await;

    // THEN: Wire body is minimal and negated
    let requests = received(&server).await;
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("POST request should be recorded");
    let sent: Value = post.body_json().unwrap();
    assert_eq!(
        sent,
        json!({"amount": -42.5, "date": "2025-03-14", "user_id": 1})
    );

    // AND: The new transaction is appended after the existing one
    let state = view_model.state();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].id, 2);
    assert_eq!(state.items[1].amount, Decimal::new(-4250, 2));
    assert!(!state.is_loading);
    assert_eq!(state.error_message, None);
}

#[tokio::test]
async fn given_income_with_description_when_creating_then_sign_kept_and_fields_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("transactions")))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(transaction_json(3, 75.0, Some("Gift"), Some(5))),
        )
        .mount(&server)
        .await;
    let view_model = TransactionViewModel::new(client_for(&server));

    view_model
        .create_transaction(
            Decimal::new(75, 0),
            Some(String::from("Gift")),
            march_14(),
            Some(5),
            false,
        )
        .await;

    let sent: Value = received(&server).await[0].body_json().unwrap();
    assert_eq!(sent["amount"], json!(75.0));
    assert_eq!(sent["description"], json!("Gift"));
    assert_eq!(sent["category_id"], json!(5));
    assert_eq!(view_model.state().items[0].description.as_deref(), Some("Gift"));
}

#[tokio::test]
async fn given_blank_description_when_creating_then_key_is_omitted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("transactions")))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(transaction_json(4, -8.0, None, None)),
        )
        .mount(&server)
        .await;
    let view_model = TransactionViewModel::new(client_for(&server));

    view_model
        .create_transaction(Decimal::new(8, 0), Some(String::from("   ")), march_14(), None, true)
        .await;

    let sent: Value = received(&server).await[0].body_json().unwrap();
    assert!(sent.get("description").is_none());
}

#[tokio::test]
async fn given_category_filter_when_fetching_then_user_and_category_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "transactions": [] })))
        .mount(&server)
        .await;
    let view_model = TransactionViewModel::new(client_for(&server));

    view_model.fetch_transactions(Some(4)).await;

    assert_eq!(
        received(&server).await[0].url.query(),
        Some("user_id=1&category_id=4")
    );
    assert!(view_model.state().items.is_empty());
}

/// **VALUE**: When two fetches overlap, the older response cannot overwrite the
/// newer one even if it arrives last.
///
/// **WHY THIS MATTERS**: Switching category filters quickly fires several fetches.
/// The list must end up showing the last filter the user picked.
///
/// **BUG THIS CATCHES**: Would catch removal of the operation-token check; the slow
/// category-1 response would then replace the category-2 list.
#[tokio::test]
async fn given_slow_older_fetch_when_newer_fetch_finishes_first_then_newer_items_win() {
    // GIVEN: Category 1 answers slowly, category 2 immediately
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .and(query_param("category_id", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "transactions": [transaction_json(10, -1.0, Some("old"), Some(1))]
                }))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .and(query_param("category_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction_json(20, -2.0, Some("new"), Some(2))]
        })))
        .mount(&server)
        .await;
    let view_model = TransactionViewModel::new(client_for(&server));

    // WHEN: Both fetches run concurrently, category 1 first
    tokio::join!(
        view_model.fetch_transactions(Some(1)),
        view_model.fetch_transactions(Some(2)),
    );

    // THEN: Only the newer result is shown
    let state = view_model.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 20);
    assert!(!state.is_loading);
    assert_eq!(state.error_message, None);
}

#[tokio::test]
async fn given_subscriber_when_fetch_completes_then_latest_state_is_observed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction_json(1, -3.0, None, None)]
        })))
        .mount(&server)
        .await;
    let view_model = TransactionViewModel::new(client_for(&server));
    let mut receiver = view_model.subscribe();

    let background = view_model.clone();
    tokio::spawn(async move { background.fetch_transactions(None).await })
        .await
        .unwrap();

    assert!(receiver.has_changed().unwrap());
    let observed = receiver.borrow_and_update().clone();
    assert_eq!(observed.items.len(), 1);
    assert!(!observed.is_loading);
}

/// **VALUE**: A create that finishes after a newer fetch already returned the
/// created transaction leaves it in the list once.
///
/// **WHY THIS MATTERS**: Users often refresh while a save is still pending. The
/// refreshed list includes the new entry, and the late create must not add it again.
///
/// **BUG THIS CATCHES**: Would catch a stale create that appends without checking
/// whether the entity is already present.
#[tokio::test]
async fn given_slow_create_when_newer_fetch_returns_it_first_then_not_duplicated() {
    // GIVEN: Saving takes a while, listing already includes the saved entry
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("transactions")))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(transaction_json(2, -9.0, Some("Lunch"), None))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("transactions")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [transaction_json(2, -9.0, Some("Lunch"), None)]
        })))
        .mount(&server)
        .await;
    let view_model = TransactionViewModel::new(client_for(&server));

    // WHEN: A fetch starts while the create is pending and finishes first
    tokio::join!(
        view_model.create_transaction(
            Decimal::new(9, 0),
            Some(String::from("Lunch")),
            march_14(),
            None,
            true,
        ),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            view_model.fetch_transactions(None).await;
        },
    );

    // THEN: The transaction appears exactly once
    let state = view_model.state();
    let ids: Vec<i64> = state.items.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);
    assert!(!state.is_loading);
    assert_eq!(state.error_message, None);
}
