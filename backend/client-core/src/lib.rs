pub mod api_client;
pub mod config;
pub mod error;
pub mod view_model;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;

pub const API_SERVER_HOSTNAME: &str = "localhost";
pub const API_SERVER_PORT: u16 = 5000;
pub const API_SERVER_LOCAL_URL: &str =
    const_format::concatcp!("http://", API_SERVER_HOSTNAME, ":", API_SERVER_PORT, "/api");

/// Base URL used when no override has been persisted.
///
/// `AIDVISORS_API_BASE_URL` at build time wins; otherwise debug builds talk to
/// the local development server and release builds to the deployed one.
pub const DEFAULT_API_BASE_URL: &str = match option_env!("AIDVISORS_API_BASE_URL") {
    Some(url) => url,
    None => BUILD_DEFAULT_API_BASE_URL,
};

#[cfg(debug_assertions)]
const BUILD_DEFAULT_API_BASE_URL: &str = API_SERVER_LOCAL_URL;

#[cfg(not(debug_assertions))]
const BUILD_DEFAULT_API_BASE_URL: &str = "https://api.example.com/api";

/// Placeholder identity until real sessions exist.
pub const DEFAULT_USER_ID: i64 = 1;
