pub mod endpoints;

use crate::DEFAULT_API_BASE_URL;
use crate::config::AppConfig;
use crate::error::api::ApiError;
use crate::error::config::ConfigError;

use endpoints::{
    BUDGET_ID_PARAM, BUDGETS_ENDPOINT, CATEGORIES_ENDPOINT, CATEGORY_ID_PARAM, HEALTH_ENDPOINT,
    TRANSACTIONS_ENDPOINT, USER_ID_PARAM, USERS_ENDPOINT, compose_url, with_query,
};

use common::{ErrorLocation, HttpStatusCode};
use models::{
    Budget, BudgetsResponse, CategoriesResponse, HealthStatus, NewBudget, NewTransaction,
    Transaction, TransactionsResponse, User, UsersResponse,
};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP access to the budgeting API.
///
/// Constructed explicitly and shared as `Arc<ApiClient>`; every holder sees
/// base URL changes made through [`ApiClient::set_base_url`]. Clones share the
/// same base URL as well.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<RwLock<String>>,
    config_dir: Option<Arc<PathBuf>>,
}

impl ApiClient {
    /// Client for `base_url` that keeps base URL changes in memory only.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::build(base_url.into(), DEFAULT_TIMEOUT_DURATION, None)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        Self::build(base_url.into(), timeout, None)
    }

    /// Client configured from `{config_dir}/config.json`.
    ///
    /// Uses the persisted base URL when one was saved, [`DEFAULT_API_BASE_URL`]
    /// otherwise. Later [`ApiClient::set_base_url`] calls are written back to
    /// the same directory.
    pub fn from_config(config_dir: &Path) -> Result<Self, ApiError> {
        let config = AppConfig::load_or_default(config_dir);
        let base_url = config
            .server
            .api_base_url
            .clone()
            .unwrap_or_else(|| String::from(DEFAULT_API_BASE_URL));

        info!("Using API base URL {base_url}");

        Self::build(
            base_url,
            config.request_timeout(),
            Some(config_dir.to_path_buf()),
        )
    }

    fn build(
        base_url: String,
        timeout: Duration,
        config_dir: Option<PathBuf>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Unknown {
                message: format!("Failed to build HTTP client: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client,
            base_url: Arc::new(RwLock::new(base_url)),
            config_dir: config_dir.map(Arc::new),
        })
    }

    pub async fn base_url(&self) -> String {
        self.base_url.read().await.clone()
    }

    /// Replace the base URL for all subsequent calls and persist it.
    ///
    /// Only emptiness is rejected. Setting the current value again is a no-op.
    /// The in-memory URL changes only after the config was written, so a
    /// failed save can be retried with the same value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] for an empty URL, or the
    /// underlying [`ConfigError`] if the config file cannot be written.
    pub async fn set_base_url(&self, url: impl Into<String>) -> Result<(), ConfigError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("API base URL cannot be empty"),
            });
        }

        if *self.base_url.read().await == url {
            debug!("API base URL already {url}, nothing to change");
            return Ok(());
        }

        if let Some(config_dir) = &self.config_dir {
            let mut config = AppConfig::load_or_default(config_dir);
            config.server.api_base_url = Some(url.clone());
            config.save(config_dir)?;
        }

        let mut current = self.base_url.write().await;
        info!("API base URL changed from {} to {}", *current, url);
        *current = url;

        Ok(())
    }

    // ============================================
    // BUDGETS
    // ============================================

    pub async fn fetch_budgets(&self, user_id: Option<i64>) -> Result<BudgetsResponse, ApiError> {
        let endpoint = with_query(BUDGETS_ENDPOINT, &[(USER_ID_PARAM, user_id)]);
        self.get(&endpoint).await
    }

    pub async fn create_budget(&self, budget: &NewBudget) -> Result<Budget, ApiError> {
        self.post(BUDGETS_ENDPOINT, budget).await
    }

    // ============================================
    // CATEGORIES
    // ============================================

    pub async fn fetch_categories(
        &self,
        budget_id: Option<i64>,
    ) -> Result<CategoriesResponse, ApiError> {
        let endpoint = with_query(CATEGORIES_ENDPOINT, &[(BUDGET_ID_PARAM, budget_id)]);
        self.get(&endpoint).await
    }

    // ============================================
    // TRANSACTIONS
    // ============================================

    pub async fn fetch_transactions(
        &self,
        user_id: Option<i64>,
        category_id: Option<i64>,
    ) -> Result<TransactionsResponse, ApiError> {
        let endpoint = with_query(
            TRANSACTIONS_ENDPOINT,
            &[(USER_ID_PARAM, user_id), (CATEGORY_ID_PARAM, category_id)],
        );
        self.get(&endpoint).await
    }

    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        self.post(TRANSACTIONS_ENDPOINT, transaction).await
    }

    // ============================================
    // USERS & HEALTH
    // ============================================

    pub async fn fetch_users(&self) -> Result<UsersResponse, ApiError> {
        self.get(USERS_ENDPOINT).await
    }

    pub async fn fetch_user(&self, user_id: i64) -> Result<User, ApiError> {
        self.get(&format!("{USERS_ENDPOINT}/{user_id}")).await
    }

    pub async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        self.get(HEALTH_ENDPOINT).await
    }

    // ============================================
    // REQUEST PIPELINE
    // ============================================

    async fn endpoint_url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let base_url = self.base_url.read().await.clone();
        compose_url(&base_url, endpoint)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint).await?;
        self.execute(Method::GET, url, None).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.endpoint_url(endpoint).await?;
        let body = serde_json::to_vec(body).map_err(ApiError::serialization)?;
        self.execute(Method::POST, url, Some(body)).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<T, ApiError> {
        debug!("{method} {url}");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }

        let response = request.send().await.map_err(ApiError::from_send)?;

        // Status wins over the body: a failing response is never decoded.
        let status = HttpStatusCode::from(response.status().as_u16());
        if status.is_failure() {
            warn!("{method} {url} failed with HTTP {status}");
            return Err(ApiError::server(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(ApiError::from_body)?;
        serde_json::from_slice(&bytes).map_err(ApiError::decoding)
    }
}
