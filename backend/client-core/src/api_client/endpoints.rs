//! Resource paths and URL assembly for the budgeting API.

use crate::error::api::ApiError;

use url::Url;

pub const BUDGETS_ENDPOINT: &str = "budgets";
pub const CATEGORIES_ENDPOINT: &str = "categories";
pub const TRANSACTIONS_ENDPOINT: &str = "transactions";
pub const USERS_ENDPOINT: &str = "users";
pub const HEALTH_ENDPOINT: &str = "health";

pub const USER_ID_PARAM: &str = "user_id";
pub const BUDGET_ID_PARAM: &str = "budget_id";
pub const CATEGORY_ID_PARAM: &str = "category_id";

/// Appends the present filters to `path` as a query string.
///
/// Absent filters are skipped. The first present one is prefixed with `?`,
/// the rest with `&`, in the order given.
pub fn with_query(path: &str, params: &[(&str, Option<i64>)]) -> String {
    let mut endpoint = String::from(path);
    let mut separator = '?';

    for (key, value) in params {
        if let Some(value) = value {
            endpoint.push(separator);
            endpoint.push_str(key);
            endpoint.push('=');
            endpoint.push_str(&value.to_string());
            separator = '&';
        }
    }

    endpoint
}

/// Joins `endpoint` onto `base_url` with exactly one `/` between them.
///
/// `Url::join` is not used because it drops the last path segment of a base
/// without a trailing slash (`.../api` + `budgets` would lose `api`).
#[track_caller]
pub fn compose_url(base_url: &str, endpoint: &str) -> Result<Url, ApiError> {
    let url = Url::parse(&format!("{}/{}", base_url.trim_end_matches('/'), endpoint))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::invalid_url(format!(
            "unsupported scheme '{other}' in {url}"
        ))),
    }
}
