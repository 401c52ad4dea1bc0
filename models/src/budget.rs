use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A spending plan for one user over an inclusive date range.
///
/// Dates stay as `YYYY-MM-DD` strings exactly as the server sent them.
/// `start_date <= end_date` is the server's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
}

/// Request body for `POST /budgets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBudget {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub start_date: String,
    pub end_date: String,
    pub user_id: i64,
}

impl NewBudget {
    pub fn new(
        name: impl Into<String>,
        amount: Decimal,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        user_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            amount,
            start_date: start_date.into(),
            end_date: end_date.into(),
            user_id,
        }
    }
}
