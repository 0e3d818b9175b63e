//! HTTP client wrapper - the two calls the storefront makes to its backend

use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::{DEVICES_PATH, QUOTE_PATH};
use crate::error::FetchError;
use crate::models::{Device, Quote, Selection};

/// Read the body and decode it, treating non-2xx statuses as failures
async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, FetchError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// `GET {base}/api/devices`
pub async fn fetch_devices(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Vec<Device>, FetchError> {
    let url = config.api_url(DEVICES_PATH);
    let start = Instant::now();

    let resp = client.get(&url).send().await?;
    let devices: Vec<Device> = decode_json(resp).await?;

    tracing::debug!(
        url = %url,
        count = devices.len(),
        time_ms = start.elapsed().as_millis() as u64,
        "Fetched device catalog"
    );
    Ok(devices)
}

/// `POST {base}/api/quote` with the selection as JSON body
pub async fn fetch_quote(
    client: &reqwest::Client,
    config: &Config,
    selection: &Selection,
) -> Result<Quote, FetchError> {
    let url = config.api_url(QUOTE_PATH);
    let start = Instant::now();

    let resp = client.post(&url).json(selection).send().await?;
    let quote: Quote = decode_json(resp).await?;

    tracing::debug!(
        url = %url,
        offer = quote.offer,
        time_ms = start.elapsed().as_millis() as u64,
        "Received quote"
    );
    Ok(quote)
}

/// Create an HTTP client; a timeout is only applied when configured
pub fn create_client(config: &Config) -> reqwest::Client {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().unwrap_or_else(|_| reqwest::Client::new())
}
