use std::time::Duration;

use reqwest::Client;

use crate::providers::{ProviderError, Result};
use crate::structures::ProvidersConfig;

/// Shared client for both providers. The geocoding provider refuses requests
/// without an identifying user agent.
pub fn build_client(config: &ProvidersConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Sends a GET and decodes the JSON body, mapping non-success statuses to
/// [`ProviderError::Status`].
pub async fn get_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
    provider: &str,
) -> Result<T> {
    let resp = request.send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(ProviderError::Status {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    let body = resp.text().await?;
    decode(&body, provider)
}

pub fn decode<T: serde::de::DeserializeOwned>(body: &str, provider: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
        provider: provider.to_string(),
        reason: e.to_string(),
    })
}
