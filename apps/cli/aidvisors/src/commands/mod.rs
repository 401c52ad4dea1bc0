//! Command handlers. Budgets and transactions go through their view-models,
//! the remaining lookups call the API client directly.

pub mod budgets;
pub mod catalog;
pub mod server;
pub mod transactions;

use crate::cli::Command;
use crate::error::AidvisorsError;
use crate::output::Output;

use client_core::ApiClient;
use client_core::view_model::ViewState;

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

use log::debug;

/// Run one command against `client`, writing its result to `out`.
pub async fn dispatch<W: Write>(
    command: Command,
    client: Arc<ApiClient>,
    user_id: i64,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    debug!("Dispatching {command:?} for user {user_id}");

    match command {
        Command::Budgets => budgets::list(client, user_id, out).await,
        Command::AddBudget {
            name,
            amount,
            start,
            end,
        } => budgets::add(client, user_id, &name, amount, start, end, out).await,
        Command::Transactions { category_id } => {
            transactions::list(client, user_id, category_id, out).await
        }
        Command::AddTransaction {
            amount,
            date,
            description,
            category_id,
            income,
        } => {
            let entry = transactions::Entry {
                amount,
                date,
                description,
                category_id,
                is_expense: !income,
            };
            transactions::add(client, user_id, entry, out).await
        }
        Command::Categories { budget_id } => catalog::categories(&client, budget_id, out).await,
        Command::Users => catalog::users(&client, out).await,
        Command::User { id } => catalog::user(&client, id, out).await,
        Command::Health => server::health(&client, out).await,
        Command::SetUrl { url } => server::set_url(&client, url, out).await,
        Command::ShowUrl => server::show_url(&client, out).await,
    }
}

/// Items of a finished view-model action, or its error message as an error.
#[track_caller]
pub(crate) fn settled<T>(state: ViewState<T>) -> Result<Vec<T>, AidvisorsError> {
    match state.error_message {
        Some(message) => Err(AidvisorsError::Request {
            message,
            location: ErrorLocation::from(Location::caller()),
        }),
        None => Ok(state.items),
    }
}

/// The entity a successful create appended.
#[track_caller]
pub(crate) fn created<T>(state: ViewState<T>) -> Result<T, AidvisorsError> {
    settled(state)?
        .pop()
        .ok_or_else(|| AidvisorsError::Aidvisors {
            message: String::from("Create reported success but nothing was added"),
            location: ErrorLocation::from(Location::caller()),
        })
}
