use crate::output::{Output, OutputFormat, Row};

use models::{Budget, Decimal, Transaction};

use serde_json::Value;

fn groceries() -> Budget {
    Budget {
        id: 1,
        name: String::from("Groceries"),
        amount: Decimal::new(500, 0),
        start_date: String::from("2025-01-01"),
        end_date: String::from("2025-01-31"),
        user_id: 1,
    }
}

fn rendered(output: Output<Vec<u8>>) -> String {
    String::from_utf8(output.into_inner()).unwrap()
}

#[test]
fn given_budgets_when_listed_as_text_then_one_row_each() {
    let mut output = Output::new(Vec::new(), OutputFormat::Text);

    output.list(&[groceries(), groceries()]).unwrap();

    let text = rendered(output);
    assert_eq!(text.lines().count(), 2);
    assert!(text.lines().all(|l| l.contains("Groceries") && l.contains("2025-01-01 .. 2025-01-31")));
}

#[test]
fn given_no_items_when_listed_as_text_then_placeholder_printed() {
    let mut output = Output::new(Vec::new(), OutputFormat::Text);

    output.list::<Budget>(&[]).unwrap();

    assert_eq!(rendered(output), "(none)\n");
}

#[test]
fn given_budget_when_listed_as_json_then_wire_shape_is_kept() {
    let mut output = Output::new(Vec::new(), OutputFormat::Json);

    output.list(&[groceries()]).unwrap();

    let value: Value = serde_json::from_str(&rendered(output)).unwrap();
    assert_eq!(value[0]["name"], "Groceries");
    assert_eq!(value[0]["amount"], 500.0);
}

#[test]
fn given_transaction_without_description_when_rendered_then_dash_shown() {
    let transaction = Transaction {
        id: 7,
        amount: Decimal::new(-4250, 2),
        description: None,
        date: String::from("2025-03-14"),
        user_id: 1,
        category_id: None,
    };

    let row = transaction.row();

    assert!(row.contains("expense"));
    assert!(row.contains("-42.50"));
    assert!(row.contains("  -"));
    assert!(!row.contains("category"));
}

#[test]
fn given_message_when_json_format_then_wrapped_in_object() {
    let mut output = Output::new(Vec::new(), OutputFormat::Json);

    output.message("API base URL set to http://x/api").unwrap();

    let value: Value = serde_json::from_str(&rendered(output)).unwrap();
    assert_eq!(value["message"], "API base URL set to http://x/api");
}

#[test]
fn given_positive_amount_when_rendered_then_marked_as_income() {
    let transaction = Transaction {
        id: 8,
        amount: Decimal::new(1200, 0),
        description: Some(String::from("Salary")),
        date: String::from("2025-03-01"),
        user_id: 1,
        category_id: Some(3),
    };

    let row = transaction.row();

    assert!(row.contains("income"));
    assert!(!row.contains("expense"));
    assert!(row.contains("category #3"));
}
