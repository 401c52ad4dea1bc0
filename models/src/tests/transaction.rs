use crate::{Decimal, NewBudget, NewTransaction, Transaction, TransactionsResponse};

use serde_json::json;

/// **VALUE**: Optional fields that were never set must not appear in the POST body.
///
/// **WHY THIS MATTERS**: The server reads `description` with a default when the key is
/// missing. Sending `"description": null` stores a null instead of the default.
///
/// **BUG THIS CATCHES**: Would catch removal of `skip_serializing_if` on either field.
#[test]
fn given_new_transaction_without_optionals_when_serialized_then_keys_are_absent() {
    // GIVEN: An expense with no description and no category
    let body = NewTransaction::new(Decimal::new(-4250, 2), "2025-03-14", 1);

    // WHEN: Serializing the request body
    let value = serde_json::to_value(&body).unwrap();

    // THEN: Only the required keys are present
    assert_eq!(
        value,
        json!({"amount": -42.5, "date": "2025-03-14", "user_id": 1})
    );
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("description"));
    assert!(!object.contains_key("category_id"));
}

#[test]
fn given_new_transaction_with_optionals_when_serialized_then_keys_are_present() {
    let body = NewTransaction::new(Decimal::new(195, 1), "2025-03-15", 1)
        .with_description(Some(String::from("Refund")))
        .with_category_id(Some(4));

    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(value["description"], json!("Refund"));
    assert_eq!(value["category_id"], json!(4));
    assert_eq!(value["amount"], json!(19.5));
}

#[test]
fn given_only_category_when_serialized_then_description_is_still_absent() {
    let body = NewTransaction::new(Decimal::new(-10, 0), "2025-03-15", 1)
        .with_description(None)
        .with_category_id(Some(2));

    let value = serde_json::to_value(&body).unwrap();
    let object = value.as_object().unwrap();

    assert!(!object.contains_key("description"));
    assert_eq!(object["category_id"], json!(2));
}

#[test]
fn given_new_budget_when_serialized_then_uses_wire_field_names() {
    let body = NewBudget::new("Groceries", Decimal::new(500, 0), "2025-01-01", "2025-01-31", 1);

    let value = serde_json::to_value(&body).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "Groceries",
            "amount": 500.0,
            "start_date": "2025-01-01",
            "end_date": "2025-01-31",
            "user_id": 1
        })
    );
}

#[test]
fn given_transactions_with_null_optionals_when_decoded_then_become_none() {
    let payload = json!({
        "transactions": [
            {"id": 1, "amount": -12.0, "description": null, "date": "2025-01-02", "user_id": 1, "category_id": null},
            {"id": 2, "amount": 900.0, "description": "Salary", "date": "2025-01-03", "user_id": 1, "category_id": 3}
        ]
    });

    let response: TransactionsResponse = serde_json::from_value(payload).unwrap();

    assert_eq!(response.transactions[0].description, None);
    assert_eq!(response.transactions[0].category_id, None);
    assert!(response.transactions[0].is_expense());
    assert_eq!(response.transactions[1].description.as_deref(), Some("Salary"));
    assert_eq!(response.transactions[1].category_id, Some(3));
    assert!(!response.transactions[1].is_expense());
}

#[test]
fn given_transaction_without_optional_keys_when_decoded_then_defaults_apply() {
    let transaction: Transaction = serde_json::from_value(json!({
        "id": 4,
        "amount": -3.5,
        "date": "2025-01-09",
        "user_id": 1
    }))
    .unwrap();

    assert_eq!(transaction.description, None);
    assert_eq!(transaction.category_id, None);
    assert_eq!(transaction.amount, Decimal::new(-35, 1));
}
