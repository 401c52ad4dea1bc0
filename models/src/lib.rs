//! Domain models for Aidvisors.
//!
//! Plain records mirroring the JSON the budgeting API sends and accepts.
//! Models have no behaviour beyond (de)serialization - they are decoded from
//! server responses or built locally right before a create call.
//!
//! ## Architecture
//!
//! - **models** (this crate): Pure data structures
//! - **client-core**: HTTP access and view-model state operating on models
//! - **aidvisors**: Command-line host wiring everything together

pub mod budget;
pub mod category;
pub mod date;
pub mod health;
pub mod responses;
pub mod transaction;
pub mod user;

pub use budget::{Budget, NewBudget};
pub use category::Category;
pub use date::{API_DATE_FORMAT, format_api_date};
pub use health::HealthStatus;
pub use responses::{BudgetsResponse, CategoriesResponse, TransactionsResponse, UsersResponse};
pub use transaction::{NewTransaction, Transaction};
pub use user::User;

pub use rust_decimal::Decimal;

#[cfg(test)]
mod tests;
