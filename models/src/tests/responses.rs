use crate::{Budget, BudgetsResponse, CategoriesResponse, Decimal, User, UsersResponse};

use serde_json::json;

/// **VALUE**: Decodes the exact envelope the budgets endpoint returns.
///
/// **WHY THIS MATTERS**: Every budget screen starts from this payload. If the snake_case
/// keys or the float amount stop decoding, the list screen can only ever show an error.
///
/// **BUG THIS CATCHES**: Would catch a renamed field, or an amount encoding that expects
/// a string instead of a JSON number.
#[test]
fn given_budgets_envelope_when_decoded_then_fields_map_by_snake_case_name() {
    // GIVEN: The payload from the groceries scenario
    let payload = json!({
        "budgets": [{
            "id": 1,
            "name": "Groceries",
            "amount": 500.0,
            "start_date": "2025-01-01",
            "end_date": "2025-01-31",
            "user_id": 1
        }]
    });

    // WHEN: Decoding into the envelope
    let response: BudgetsResponse = serde_json::from_value(payload).unwrap();

    // THEN: Every field lands where expected
    assert_eq!(response.budgets.len(), 1);
    let budget = &response.budgets[0];
    assert_eq!(budget.id, 1);
    assert_eq!(budget.name, "Groceries");
    assert_eq!(budget.amount, Decimal::new(500, 0));
    assert_eq!(budget.start_date, "2025-01-01");
    assert_eq!(budget.end_date, "2025-01-31");
    assert_eq!(budget.user_id, 1);
}

/// **VALUE**: Re-serializing a decoded entity yields the same JSON object.
///
/// **BUG THIS CATCHES**: Would catch a field rename on only one direction
/// (e.g. `deserialize` alias without matching `serialize` name).
#[test]
fn given_decoded_budget_when_serialized_again_then_json_is_unchanged() {
    let original = json!({
        "id": 7,
        "name": "Rent",
        "amount": 1250.5,
        "start_date": "2025-02-01",
        "end_date": "2025-02-28",
        "user_id": 3
    });

    let budget: Budget = serde_json::from_value(original.clone()).unwrap();
    let reencoded = serde_json::to_value(&budget).unwrap();

    assert_eq!(reencoded, original);
}

#[test]
fn given_envelope_order_when_decoded_then_server_order_is_preserved() {
    let payload = json!({
        "categories": [
            {"id": 9, "name": "Fuel", "planned_amount": 80.0, "budget_id": 1},
            {"id": 2, "name": "Food", "planned_amount": 300.0, "budget_id": 1},
            {"id": 5, "name": "Fun", "planned_amount": 45.25, "budget_id": 1}
        ]
    });

    let response: CategoriesResponse = serde_json::from_value(payload).unwrap();

    let ids: Vec<i64> = response.categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![9, 2, 5]);
    assert_eq!(response.categories[2].planned_amount, Decimal::new(4525, 2));
}

#[test]
fn given_users_without_created_at_when_decoded_then_field_is_none() {
    let payload = json!({
        "users": [{"id": 1, "username": "demo", "email": "demo@example.com"}]
    });

    let response: UsersResponse = serde_json::from_value(payload).unwrap();

    assert_eq!(response.users[0].created_at, None);
}

#[test]
fn given_single_user_with_created_at_when_round_tripped_then_key_survives() {
    let original = json!({
        "id": 1,
        "username": "demo",
        "email": "demo@example.com",
        "created_at": "2025-01-01T10:00:00"
    });

    let user: User = serde_json::from_value(original.clone()).unwrap();

    assert_eq!(user.created_at.as_deref(), Some("2025-01-01T10:00:00"));
    assert_eq!(serde_json::to_value(&user).unwrap(), original);
}
