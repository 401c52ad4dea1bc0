use crate::helpers::{UNREACHABLE_BASE_URL, api_path, client_for, groceries_budget, received};

use client_core::view_model::{BudgetViewModel, ViewState};

use models::Decimal;

use chrono::NaiveDate;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: The budgets screen happy path, from idle to a populated list.
///
/// **WHY THIS MATTERS**: This is what every launch of the budgets screen does.
///
/// **BUG THIS CATCHES**: Would catch the loading flag staying on after success, a
/// stale error surviving, or the placeholder user id not being sent.
#[tokio::test]
async fn given_groceries_budget_on_server_when_fetching_then_state_holds_it() {
    // GIVEN: The server has one budget for user 1
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("budgets")))
        .and(query_param("user_id", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "budgets": [groceries_budget()] })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let view_model = BudgetViewModel::new(client_for(&server));
    assert_eq!(view_model.state(), ViewState::default());

    // WHEN: Fetching
    view_model.fetch_budgets().await;

    // THEN: One budget, not loading, no error
    let state = view_model.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 1);
    assert_eq!(state.items[0].name, "Groceries");
    assert!(!state.is_loading);
    assert_eq!(state.error_message, None);
}

/// **VALUE**: A failed refresh keeps what the user was already looking at.
///
/// **BUG THIS CATCHES**: Would catch the failure path clearing `items`, or leaving
/// `is_loading` on so the spinner never goes away.
#[tokio::test]
async fn given_loaded_budgets_when_network_fails_then_items_kept_and_error_set() {
    // GIVEN: A view-model that already loaded one budget
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("budgets")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "budgets": [groceries_budget()] })),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);
    let view_model = BudgetViewModel::new(client.clone());
    view_model.fetch_budgets().await;
    let before = view_model.state().items;

    // WHEN: The server becomes unreachable and the user retries
    client.set_base_url(UNREACHABLE_BASE_URL).await.unwrap();
    view_model.fetch_budgets().await;

    // THEN: Old items remain, loading is off, an error is shown
    let state = view_model.state();
    assert_eq!(state.items, before);
    assert!(!state.is_loading);
    let message = state.error_message.expect("error message should be set");
    assert!(message.starts_with("Failed to fetch budgets:"));
}

#[tokio::test]
async fn given_form_input_when_creating_budget_then_dates_formatted_and_budget_appended() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("budgets")))
        .respond_with(ResponseTemplate::new(201).set_body_json(groceries_budget()))
        .mount(&server)
        .await;
    let view_model = BudgetViewModel::new(client_for(&server));

    view_model
        .create_budget(
            "Groceries",
            Decimal::new(500, 0),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        )
        .await;

    let sent: Value = received(&server).await[0].body_json().unwrap();
    assert_eq!(
        sent,
        json!({
            "name": "Groceries",
            "amount": 500.0,
            "start_date": "2025-01-01",
            "end_date": "2025-01-31",
            "user_id": 1
        })
    );
    let state = view_model.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].end_date, "2025-01-31");
    assert!(!state.is_loading);
}

#[tokio::test]
async fn given_server_rejects_budget_when_creating_then_error_set_and_list_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("budgets")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "bad"})))
        .mount(&server)
        .await;
    let view_model = BudgetViewModel::new(client_for(&server)).with_user_id(7);

    view_model
        .create_budget(
            "Travel",
            Decimal::new(900, 0),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        )
        .await;

    let state = view_model.state();
    assert!(state.items.is_empty());
    assert!(!state.is_loading);
    assert_eq!(
        state.error_message.as_deref(),
        Some("Failed to create budget: The server responded with status 400")
    );
    let sent: Value = received(&server).await[0].body_json().unwrap();
    assert_eq!(sent["user_id"], json!(7));
}
