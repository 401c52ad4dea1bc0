use crate::helpers::{api_path, client_for, groceries_budget, received, transaction_json};

use models::{Budget, Decimal, NewBudget, NewTransaction};

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Absent optional fields never reach the server, not even as `null`.
///
/// **WHY THIS MATTERS**: The server reads a missing `description` as "use default"
/// but stores an explicit `null` as-is.
///
/// **BUG THIS CATCHES**: Would catch the POST body being built from a struct that
/// serializes `None` as `null`.
#[tokio::test]
async fn given_transaction_without_optionals_when_creating_then_body_omits_them() {
    // GIVEN: A server accepting JSON transactions
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("transactions")))
        .and(header("content-type", "application/json"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(transaction_json(10, -42.5, None, None)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Creating an expense with no description or category
    let body = NewTransaction::new(Decimal::new(-4250, 2), "2025-03-14", 1);
    let created = client.create_transaction(&body).await.unwrap();

    // THEN: The wire body has exactly the three required keys
    let sent: Value = received(&server).await[0].body_json().unwrap();
    assert_eq!(
        sent,
        json!({"amount": -42.5, "date": "2025-03-14", "user_id": 1})
    );
    assert_eq!(created.id, 10);
    assert_eq!(created.amount, Decimal::new(-4250, 2));
}

#[tokio::test]
async fn given_transaction_with_optionals_when_creating_then_body_includes_them() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("transactions")))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(transaction_json(11, 250.0, Some("Bonus"), Some(2))),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let body = NewTransaction::new(Decimal::new(250, 0), "2025-03-14", 1)
        .with_description(Some(String::from("Bonus")))
        .with_category_id(Some(2));
    let created = client.create_transaction(&body).await.unwrap();

    let sent: Value = received(&server).await[0].body_json().unwrap();
    assert_eq!(sent["description"], json!("Bonus"));
    assert_eq!(sent["category_id"], json!(2));
    assert_eq!(created.category_id, Some(2));
}

/// **VALUE**: Decoding a server budget and sending the same shape back is lossless.
///
/// **BUG THIS CATCHES**: Would catch a field that is renamed in only one direction,
/// or an amount that changes representation between decode and encode.
#[tokio::test]
async fn given_decoded_budget_when_sent_back_as_new_budget_then_fields_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(api_path("budgets")))
        .respond_with(ResponseTemplate::new(201).set_body_json(groceries_budget()))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let decoded: Budget = serde_json::from_value(groceries_budget()).unwrap();

    let body = NewBudget::new(
        decoded.name.clone(),
        decoded.amount,
        decoded.start_date.clone(),
        decoded.end_date.clone(),
        decoded.user_id,
    );
    let created = client.create_budget(&body).await.unwrap();

    let mut sent: Value = received(&server).await[0].body_json().unwrap();
    sent["id"] = json!(decoded.id);
    assert_eq!(sent, groceries_budget());
    assert_eq!(created, decoded);
}
