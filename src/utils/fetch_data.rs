use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::error::FetchError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

fn build_client(timeout: Duration) -> Result<Client, FetchError> {
    Ok(Client::builder().timeout(timeout).build()?)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Single GET with a hard deadline. No retries.
pub async fn fetch_data<T: DeserializeOwned>(url: &str, timeout: Duration) -> Result<T, FetchError> {
    let client = build_client(timeout)?;
    let started = Instant::now();

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    tracing::debug!(url, status = %response.status(), elapsed_ms = started.elapsed().as_millis() as u64, "GET");
    read_json(response).await
}

/// Single JSON POST with a hard deadline. No retries.
pub async fn post_data<B, T>(url: &str, body: &B, timeout: Duration) -> Result<T, FetchError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let client = build_client(timeout)?;
    let started = Instant::now();

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .header("User-Agent", USER_AGENT)
        .json(body)
        .send()
        .await?;

    tracing::debug!(url, status = %response.status(), elapsed_ms = started.elapsed().as_millis() as u64, "POST");
    read_json(response).await
}
