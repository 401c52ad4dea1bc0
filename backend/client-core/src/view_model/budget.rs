use crate::DEFAULT_USER_ID;
use crate::api_client::ApiClient;
use crate::view_model::failure_message;
use crate::view_model::state::{Entity, StateStore, ViewState};

use models::{Budget, NewBudget, format_api_date};

use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use tokio::sync::watch;

/// State for the budgets screen.
///
/// `Clone` is cheap and clones share state, so an action can be handed to
/// `tokio::spawn` while the screen keeps its own handle.
#[derive(Clone)]
pub struct BudgetViewModel {
    client: Arc<ApiClient>,
    user_id: i64,
    state: Arc<StateStore<Budget>>,
}

impl BudgetViewModel {
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

    pub fn state(&self) -> ViewState<Budget> {
        self.state.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Budget>> {
        self.state.subscribe()
    }

    /// Reload the user's budgets, replacing the list on success.
    ///
    /// On failure the previous list is kept and `error_message` is set.
    pub async fn fetch_budgets(&self) {
        let token = self.state.begin();

        match self.client.fetch_budgets(Some(self.user_id)).await {
            Ok(response) => {
                debug!("Fetched {} budgets", response.budgets.len());
                if !self.state.complete_fetch(token, response.budgets) {
                    warn!("Discarding stale budgets response");
                }
            }
            Err(e) => {
                warn!("Failed to fetch budgets: {e}");
                self.state.fail(token, failure_message("fetch budgets", &e));
            }
        }
    }

    /// Create a budget and append the server's copy to the list.
    pub async fn create_budget(
        &self,
        name: &str,
        amount: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) {
        let token = self.state.begin();

        let new_budget = NewBudget::new(
            name,
            amount,
            format_api_date(start_date),
            format_api_date(end_date),
            self.user_id,
        );

        match self.client.create_budget(&new_budget).await {
            Ok(budget) => {
                info!("Created budget {} ({})", budget.id, budget.name);
                self.state.complete_create(token, budget);
            }
            Err(e) => {
                warn!("Failed to create budget: {e}");
                self.state.fail(token, failure_message("create budget", &e));
            }
        }
    }
}

impl Entity for Budget {
    fn id(&self) -> i64 {
        self.id
    }
}
