use crate::helpers::{UNREACHABLE_BASE_URL, api_base_url, api_path};

use client_core::error::{ApiErrorKind, ConfigError};
use client_core::{ApiClient, DEFAULT_API_BASE_URL};

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_empty_budgets(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(api_path("budgets")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "budgets": [] })))
        .mount(server)
        .await;
}

/// **VALUE**: Changing the base URL redirects every later call, including calls
/// made through other handles to the same client.
///
/// **WHY THIS MATTERS**: View-models hold the client by `Arc`. If they kept a copy
/// of the URL, the settings screen would have no effect until restart.
#[tokio::test]
async fn given_shared_client_when_base_url_changes_then_all_handles_follow() {
    // GIVEN: A client pointed at nothing, shared by two holders
    let server = MockServer::start().await;
    mount_empty_budgets(&server).await;
    let client = Arc::new(ApiClient::new(UNREACHABLE_BASE_URL).unwrap());
    let other_holder = Arc::clone(&client);
    assert_eq!(
        other_holder.fetch_budgets(None).await.unwrap_err().kind(),
        ApiErrorKind::RequestFailed
    );

    // WHEN: One holder changes the base URL
    client.set_base_url(api_base_url(&server)).await.unwrap();

    // THEN: The other holder's calls reach the new server
    assert!(other_holder.fetch_budgets(None).await.is_ok());
    assert_eq!(other_holder.base_url().await, api_base_url(&server));
}

#[tokio::test]
async fn given_empty_url_when_setting_base_url_then_rejected_and_unchanged() {
    let client = ApiClient::new("http://localhost:5000/api").unwrap();

    let result = client.set_base_url("").await;

    assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    assert_eq!(client.base_url().await, "http://localhost:5000/api");
}

#[tokio::test]
async fn given_no_saved_url_when_loading_from_config_then_uses_default() {
    let dir = TempDir::new().unwrap();

    let client = ApiClient::from_config(dir.path()).unwrap();

    assert_eq!(client.base_url().await, DEFAULT_API_BASE_URL);
}

/// **VALUE**: A base URL chosen in one run is used by the next.
///
/// **BUG THIS CATCHES**: Would catch `set_base_url` updating memory but never
/// writing `api_base_url`, or `from_config` ignoring the saved value.
#[tokio::test]
async fn given_url_set_when_client_recreated_from_same_dir_then_url_survives() {
    let dir = TempDir::new().unwrap();
    let first_run = ApiClient::from_config(dir.path()).unwrap();

    first_run
        .set_base_url("https://budget.example.com/api")
        .await
        .unwrap();
    drop(first_run);

    let second_run = ApiClient::from_config(dir.path()).unwrap();
    assert_eq!(second_run.base_url().await, "https://budget.example.com/api");
}

/// **VALUE**: Setting the same URL twice has no second side effect.
///
/// **BUG THIS CATCHES**: Would catch an unconditional save. The config file is
/// removed after the first set; a second write would recreate it.
#[tokio::test]
async fn given_same_url_twice_when_setting_then_second_call_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.json");
    let client = ApiClient::from_config(dir.path()).unwrap();

    client.set_base_url("http://10.0.0.5:5000/api").await.unwrap();
    let persisted = std::fs::read_to_string(&config_path).unwrap();
    std::fs::remove_file(&config_path).unwrap();

    client.set_base_url("http://10.0.0.5:5000/api").await.unwrap();

    assert!(!config_path.exists(), "Second identical set must not write");
    assert!(persisted.contains("http://10.0.0.5:5000/api"));
    assert_eq!(client.base_url().await, "http://10.0.0.5:5000/api");
}

#[tokio::test]
async fn given_in_memory_client_when_setting_url_then_only_memory_changes() {
    let client = ApiClient::new("http://localhost:5000/api").unwrap();

    client.set_base_url("http://localhost:6000/api").await.unwrap();
    client.set_base_url("http://localhost:6000/api").await.unwrap();

    assert_eq!(client.base_url().await, "http://localhost:6000/api");
}

/// **VALUE**: A URL whose save failed can be saved by setting it again.
///
/// **WHY THIS MATTERS**: The override must survive a restart. If a failed write
/// still switched the in-memory URL, the retry would look like a no-op and the
/// choice would be lost on the next launch.
///
/// **BUG THIS CATCHES**: Would catch the in-memory URL being committed before the
/// config file is written.
#[tokio::test]
async fn given_failed_save_when_retrying_same_url_then_it_is_persisted() {
    // GIVEN: A config "directory" that is actually a file, so saving fails
    let root = TempDir::new().unwrap();
    let config_dir = root.path().join("aidvisors");
    std::fs::write(&config_dir, "not a directory").unwrap();
    let client = ApiClient::from_config(&config_dir).unwrap();

    let first = client.set_base_url("http://example.org/api").await;
    assert!(matches!(first, Err(ConfigError::WriteError { .. })));
    assert_eq!(client.base_url().await, DEFAULT_API_BASE_URL);

    // WHEN: The path is fixed and the same URL is set again
    std::fs::remove_file(&config_dir).unwrap();
    client.set_base_url("http://example.org/api").await.unwrap();

    // THEN: The URL is in use and survives a reload
    assert_eq!(client.base_url().await, "http://example.org/api");
    assert!(config_dir.join("config.json").exists());
    let reloaded = ApiClient::from_config(&config_dir).unwrap();
    assert_eq!(reloaded.base_url().await, "http://example.org/api");
}
