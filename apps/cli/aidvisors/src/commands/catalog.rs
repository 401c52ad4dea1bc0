use crate::error::AidvisorsError;
use crate::output::Output;

use client_core::ApiClient;

use std::io::Write;

pub async fn categories<W: Write>(
    client: &ApiClient,
    budget_id: Option<i64>,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    let response = client.fetch_categories(budget_id).await?;
    out.list(&response.categories)
}

pub async fn users<W: Write>(client: &ApiClient, out: &mut Output<W>) -> Result<(), AidvisorsError> {
    let response = client.fetch_users().await?;
    out.list(&response.users)
}

pub async fn user<W: Write>(
    client: &ApiClient,
    id: i64,
    out: &mut Output<W>,
) -> Result<(), AidvisorsError> {
    let user = client.fetch_user(id).await?;
    out.one(&user)
}
