use aidvisors::cli::Cli;
use aidvisors::commands;
use aidvisors::error::AidvisorsError;
use aidvisors::logger::{self, initialize as LoggerInitialize};
use aidvisors::output::{Output, OutputFormat};

use client_core::ApiClient;
use client_core::config::default_config_dir;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::stdout;
use std::panic::Location;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

const LOG_DIR_NAME: &str = "logs";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if logger::is_initialized() {
                error!("{e}");
            } else {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AidvisorsError> {
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    let log_dir = config_dir.join(LOG_DIR_NAME);
    create_dir_all(&log_dir).map_err(|e| AidvisorsError::Aidvisors {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("Aidvisors starting");
    info!("Config directory: {}", config_dir.display());

    let client = Arc::new(ApiClient::from_config(&config_dir)?);

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut out = Output::new(stdout().lock(), format);

    commands::dispatch(cli.command, client, cli.user_id, &mut out).await
}
