use crate::commands::{created, settled};
use crate::error::AidvisorsError;
use crate::output::Output;

use client_core::ApiClient;
use client_core::view_model::BudgetViewModel;

use std::io::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;

pub async fn list<W: Write>(
    client: Arc<ApiClient>,
    user_id: i64,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    let view_model = BudgetViewModel::new(client).with_user_id(user_id);
    view_model.fetch_budgets().await;

    let budgets = settled(view_model.state())?;
    out.list(&budgets)
}

pub async fn add<W: Write>(
    client: Arc<ApiClient>,
    user_id: i64,
    name: &str,
    amount: Decimal,
    start: NaiveDate,
    end: NaiveDate,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    let view_model = BudgetViewModel::new(client).with_user_id(user_id);
    view_model.create_budget(name, amount, start, end).await;

    let budget = created(view_model.state())?;
    info!("Budget #{} saved", budget.id);
    out.one(&budget)
}
