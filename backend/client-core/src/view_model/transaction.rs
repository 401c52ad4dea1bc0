use crate::DEFAULT_USER_ID;
use crate::api_client::ApiClient;
use crate::view_model::failure_message;
use crate::view_model::state::{Entity, StateStore, ViewState};

use models::{NewTransaction, Transaction, format_api_date};

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use tokio::sync::watch;

/// State for the transactions screen. Shares its shape with
/// [`BudgetViewModel`](crate::view_model::BudgetViewModel).
#[derive(Clone)]
pub struct TransactionViewModel {
    client: Arc<ApiClient>,
    user_id: i64,
    state: Arc<StateStore<Transaction>>,
}

impl TransactionViewModel {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            user_id: DEFAULT_USER_ID,
            state: Arc::new(StateStore::new()),
        }
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn state(&self) -> ViewState<Transaction> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Transaction>> {
        self.state.subscribe()
    }

    /// Reload the user's transactions, optionally narrowed to one category.
    pub async fn fetch_transactions(&self, category_id: Option<i64>) {
        let token = self.state.begin();

        match self
            .client
            .fetch_transactions(Some(self.user_id), category_id)
            .await
        {
            Ok(response) => {
                debug!("Fetched {} transactions", response.transactions.len());
                if !self.state.complete_fetch(token, response.transactions) {
                    warn!("Discarding stale transactions response");
                }
            }
            Err(e) => {
                warn!("Failed to fetch transactions: {e}");
                self.state.fail(token, failure_message("fetch transactions", &e));
            }
        }
    }

    /// Record a transaction entered as a positive amount.
    ///
    /// `is_expense` flips the sign before sending. A blank description is
    /// treated as no description, so the key is left out of the request.
    pub async fn create_transaction(
        &self,
        amount: Decimal,
        description: Option<String>,
        date: NaiveDate,
        category_id: Option<i64>,
        is_expense: bool,
    ) {
        let token = self.state.begin();

        let amount = if is_expense { -amount } else { amount };
        let description = description.filter(|d| !d.trim().is_empty());
        let new_transaction = NewTransaction::new(amount, format_api_date(date), self.user_id)
            .with_description(description)
            .with_category_id(category_id);

        match self.client.create_transaction(&new_transaction).await {
            Ok(transaction) => {
                info!(
                    "Created transaction {} for {}",
                    transaction.id, transaction.amount
                );
                self.state.complete_create(token, transaction);
            }
            Err(e) => {
                warn!("Failed to create transaction: {e}");
                self.state.fail(token, failure_message("create transaction", &e));
            }
        }
    }
}

impl Entity for Transaction {
    fn id(&self) -> i64 {
        self.id
    }
}
