use aidvisors::cli::Command;
use aidvisors::commands::dispatch;
use aidvisors::error::AidvisorsError;
use aidvisors::output::{Output, OutputFormat};

use client_core::ApiClient;

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for command dispatch against a simulated API
// ============================================================================

fn client_for(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(format!("{}/api", server.uri())).expect("Failed to build ApiClient"))
}

async fn run(
    command: Command,
    client: Arc<ApiClient>,
    format: OutputFormat,
) -> (Result<(), AidvisorsError>, String) {
    let mut out = Output::new(Vec::new(), format);
    let result = dispatch(command, client, 1, &mut out).await;
    let text = String::from_utf8(out.into_inner()).expect("Output should be UTF-8");
    (result, text)
}

#[tokio::test]
async fn given_budgets_on_server_when_listing_then_rows_printed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/budgets"))
        .and(query_param("user_id", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "budgets": [{
                "id": 1, "name": "Groceries", "amount": 500.0,
                "start_date": "2025-01-01", "end_date": "2025-01-31", "user_id": 1
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (result, text) = run(Command::Budgets, client_for(&server), OutputFormat::Text).await;

    assert!(result.is_ok(), "{result:?}");
    assert!(text.contains("Groceries"));
    assert!(text.contains("2025-01-01 .. 2025-01-31"));
}

/// **VALUE**: An expense typed on the command line reaches the server negated and
/// the saved transaction is echoed back.
///
/// **WHY THIS MATTERS**: The CLI is the only caller that turns `--income` into the
/// view-model's `is_expense`. Inverting it would silently flip every booking.
///
/// **BUG THIS CATCHES**: Would catch `is_expense: income` instead of `!income`.
#[tokio::test]
async fn given_expense_entry_when_adding_transaction_then_negative_amount_sent() {
    // GIVEN: A server accepting transactions
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 5, "amount": -42.5, "date": "2025-03-14", "user_id": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    let command = Command::AddTransaction {
        amount: Decimal::new(4250, 2),
        date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        description: None,
        category_id: None,
        income: false,
    };

    // WHEN: Dispatching with JSON output
    let (result, text) = run(command, client_for(&server), OutputFormat::Json).await;

    // THEN: The request carried the negated amount
    assert!(result.is_ok(), "{result:?}");
    let requests = server.received_requests().await.unwrap();
    let sent: Value = requests[0].body_json().unwrap();
    assert_eq!(sent["amount"], json!(-42.5));

    // AND: The created transaction was printed
    let printed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(printed["id"], 5);
    assert_eq!(printed["amount"], -42.5);
}

/// **VALUE**: A failed screen load turns into a failing command with the view-model's message.
///
/// **BUG THIS CATCHES**: Would catch the CLI exiting successfully with an empty list
/// when the server is down, hiding the outage from scripts.
#[tokio::test]
async fn given_server_error_when_listing_transactions_then_request_error_returned() {
    // GIVEN: The transactions endpoint fails
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transactions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    // WHEN
    let (result, text) = run(
        Command::Transactions { category_id: None },
        client_for(&server),
        OutputFormat::Text,
    )
    .await;

    // THEN: Nothing printed, error carries the formatted message
    assert!(text.is_empty());
    match result {
        Err(AidvisorsError::Request { message, .. }) => assert_eq!(
            message,
            "Failed to fetch transactions: The server responded with status 503"
        ),
        other => panic!("Expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_categories_filter_when_listing_then_budget_id_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .and(query_param("budget_id", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [{"id": 4, "name": "Produce", "planned_amount": 120.0, "budget_id": 2}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (result, text) = run(
        Command::Categories { budget_id: Some(2) },
        client_for(&server),
        OutputFormat::Text,
    )
    .await;

    assert!(result.is_ok(), "{result:?}");
    assert!(text.contains("Produce"));
    assert!(text.contains("budget #2"));
}

#[tokio::test]
async fn given_unhealthy_server_when_checking_health_then_status_printed_and_error_returned() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "degraded", "timestamp": "2025-03-14T10:00:00Z"
        })))
        .mount(&server)
        .await;

    let (result, text) = run(Command::Health, client_for(&server), OutputFormat::Text).await;

    assert!(text.contains("degraded"));
    assert!(matches!(result, Err(AidvisorsError::Aidvisors { .. })));
}

/// **VALUE**: `set-url` survives a restart of the CLI.
///
/// **WHY THIS MATTERS**: Each CLI invocation is a fresh process. Without persistence
/// the chosen server would be forgotten immediately.
///
/// **BUG THIS CATCHES**: Would catch `set_base_url` updating memory only when the
/// client was built from a config directory.
#[tokio::test]
async fn given_config_dir_when_setting_url_then_next_client_uses_it() {
    // GIVEN: A client backed by an empty config directory
    let config_dir = tempfile::tempdir().unwrap();
    let client = Arc::new(ApiClient::from_config(config_dir.path()).unwrap());

    // WHEN: Running set-url
    let (result, text) = run(
        Command::SetUrl {
            url: String::from("http://budget.local:8080/api"),
        },
        client,
        OutputFormat::Text,
    )
    .await;

    // THEN: Confirmation printed
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(text, "API base URL set to http://budget.local:8080/api\n");

    // AND: A new client picks it up, as show-url reports
    let reloaded = Arc::new(ApiClient::from_config(config_dir.path()).unwrap());
    let (result, text) = run(Command::ShowUrl, reloaded, OutputFormat::Text).await;
    assert!(result.is_ok());
    assert_eq!(text, "http://budget.local:8080/api\n");
}

#[tokio::test]
async fn given_empty_url_when_setting_then_core_error_returned() {
    let client = Arc::new(ApiClient::new("http://localhost:5000/api").unwrap());

    let (result, _) = run(
        Command::SetUrl { url: String::new() },
        client,
        OutputFormat::Text,
    )
    .await;

    assert!(matches!(result, Err(AidvisorsError::Core { .. })));
}
