use client_core::DEFAULT_USER_ID;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Command-line client for the Aidvisors budgeting API.
#[derive(Debug, Parser)]
#[command(name = "aidvisors", version)]
pub struct Cli {
    /// Directory holding config.json and the logs/ folder
    #[arg(long, global = true, env = "AIDVISORS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// User whose budgets and transactions are shown
    #[arg(long, global = true, default_value_t = DEFAULT_USER_ID)]
    pub user_id: i64,

    /// Print results as JSON instead of text rows
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List the user's budgets
    Budgets,

    /// Create a budget
    AddBudget {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: Decimal,
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: NaiveDate,
    },

    /// List the user's transactions
    Transactions {
        #[arg(long)]
        category_id: Option<i64>,
    },

    /// Record a transaction. Amounts are entered positive and booked as
    /// expenses unless --income is given.
    AddTransaction {
        #[arg(long)]
        amount: Decimal,
        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category_id: Option<i64>,
        #[arg(long)]
        income: bool,
    },

    /// List categories
    Categories {
        #[arg(long)]
        budget_id: Option<i64>,
    },

    /// List users
    Users,

    /// Show one user
    User { id: i64 },

    /// Ask the server whether it is up
    Health,

    /// Point the client at another API and remember it
    SetUrl { url: String },

    /// Print the API base URL in use
    ShowUrl,
}
