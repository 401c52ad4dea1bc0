use crate::error::AidvisorsError;
use crate::output::Output;

use client_core::ApiClient;

use common::ErrorLocation;

use std::io::Write;
use std::panic::Location;

use log::{debug, info, warn};

/// Query the health endpoint. An answer other than "healthy" is an error so
/// scripts can rely on the exit code.
pub async fn health<W: Write>(client: &ApiClient, out: &mut Output<W>) -> Result<(), AidvisorsError> {
    debug!("Checking server health at {}", client.base_url().await);

    let status = client.health_check().await?;
    out.one(&status)?;

    if !status.is_healthy() {
        warn!("Server reported status {}", status.status);
        return Err(AidvisorsError::Aidvisors {
            message: format!("Server is not healthy: {}", status.status),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}

pub async fn set_url<W: Write>(
    client: &ApiClient,
    url: String,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    client.set_base_url(url).await?;

    let current = client.base_url().await;
    info!("API base URL is now {current}");
    out.message(&format!("API base URL set to {current}"))
}

pub async fn show_url<W: Write>(client: &ApiClient, out: &mut Output<W>) -> Result<(), AidvisorsError> {
    let current = client.base_url().await;
    out.message(&current)
}
