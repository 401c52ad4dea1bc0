//! Per-screen state holders driving the API client.
//!
//! Each view-model owns a [`ViewState`] published through a `tokio::sync::watch`
//! channel. A presentation layer either takes snapshots with `state()` or
//! subscribes and re-renders whenever the state changes.
//!
//! # Stale responses
//!
//! Every action takes a fresh operation token. Only the most recent action
//! may clear `is_loading` or set `error_message`, and a fetch result that
//! arrives after a newer action started is dropped. Created entities are
//! always appended since the server has already stored them.

pub mod budget;
pub mod state;
pub mod transaction;

pub use budget::BudgetViewModel;
pub use state::{Entity, ViewState};
pub use transaction::TransactionViewModel;

use crate::error::api::ApiError;

fn failure_message(action: &str, error: &ApiError) -> String {
    format!("Failed to {action}: {}", error.description())
}
