use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single money movement. Negative amounts are expenses, positive are income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    pub user_id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount.is_sign_negative()
    }
}

/// Request body for `POST /transactions`.
///
/// `description` and `category_id` are left out of the JSON entirely when
/// unset; the server treats a missing key differently from `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub date: String,
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl NewTransaction {
    pub fn new(amount: Decimal, date: impl Into<String>, user_id: i64) -> Self {
        Self {
            amount,
            date: date.into(),
            user_id,
            description: None,
            category_id: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_category_id(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }
}
