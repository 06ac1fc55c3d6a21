//! HTTP utilities for fetching release metadata and assets.

use crate::bundler::error::Result;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

/// Builds a client suitable for the GitHub REST API.
///
/// GitHub rejects requests without a user agent. `token`, when present, is
/// sent as a bearer token.
pub fn client(token: Option<&str>) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github+json"),
    );
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
            crate::bundler::Error::GenericError(format!("invalid GitHub token: {e}"))
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()?)
}

/// Fetches `url` and decodes the JSON body.
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    log::debug!("GET {}", url);

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    Ok(serde_json::from_slice(&body)?)
}

/// Downloads a file from a URL.
///
/// Returns the file contents as a byte vector.
pub async fn download(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    log::info!("Downloading {}", url);

    let response = client
        .get(url)
        .header(ACCEPT, "application/octet-stream")
        .send()
        .await?
        .error_for_status()?;

    let bytes = response.bytes().await?;
    log::debug!("Downloaded {} bytes from {}", bytes.len(), url);

    Ok(bytes.to_vec())
}
