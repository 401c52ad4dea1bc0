//! Shared building blocks for the Aidvisors workspace.
//!
//! Everything here is dependency-light so that `models`, `client-core`
//! and the CLI can all depend on it without pulling in the HTTP stack.

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
