//! Test helpers for API client and view-model integration tests.
//!
//! Every test gets its own `wiremock::MockServer` standing in for the
//! budgeting API, mounted under the same `/api` prefix the real server uses.

use client_core::ApiClient;

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::{MockServer, Request};

/// Path prefix shared by every API route.
pub const API_PREFIX: &str = "/api";

/// Nothing listens on port 1, so connecting fails without a response.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1/api";

pub fn api_base_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), API_PREFIX)
}

pub fn api_path(endpoint: &str) -> String {
    format!("{API_PREFIX}/{endpoint}")
}

pub fn client_for(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(api_base_url(server)).expect("Failed to build ApiClient"))
}

/// All requests the mock server saw, in arrival order.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("Request recording is enabled by default")
}

pub fn groceries_budget() -> Value {
    json!({
        "id": 1,
        "name": "Groceries",
        "amount": 500.0,
        "start_date": "2025-01-01",
        "end_date": "2025-01-31",
        "user_id": 1
    })
}

pub fn transaction_json(id: i64, amount: f64, description: Option<&str>, category_id: Option<i64>) -> Value {
    json!({
        "id": id,
        "amount": amount,
        "description": description,
        "date": "2025-03-14",
        "user_id": 1,
        "category_id": category_id
    })
}
