use crate::commands::{created, settled};
use crate::error::AidvisorsError;
use crate::output::Output;

use client_core::ApiClient;
use client_core::view_model::TransactionViewModel;

use std::io::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;

/// Transaction as entered on the command line, before sign handling.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub is_expense: bool,
}

pub async fn list<W: Write>(
    client: Arc<ApiClient>,
    user_id: i64,
    category_id: Option<i64>,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    let view_model = TransactionViewModel::new(client).with_user_id(user_id);
    view_model.fetch_transactions(category_id).await;

    let transactions = settled(view_model.state())?;
    out.list(&transactions)
}

pub async fn add<W: Write>(
    client: Arc<ApiClient>,
    user_id: i64,
    entry: Entry,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    let view_model = TransactionViewModel::new(client).with_user_id(user_id);
    view_model
        .create_transaction(
            entry.amount,
            entry.description,
            entry.date,
            entry.category_id,
            entry.is_expense,
        )
        .await;

    let transaction = created(view_model.state())?;
    info!("Transaction #{} saved", transaction.id);
    out.one(&transaction)
}
