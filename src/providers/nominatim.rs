use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::providers::{PlaceProvider, Result, decode, get_json};
use crate::structures::LngLat;

const PROVIDER: &str = "nominatim";

pub const UNKNOWN_LOCATION: &str = "Unknown location";

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// Client for the Nominatim `reverse` endpoint.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(client: Client, base_url: &str) -> NominatimClient {
        NominatimClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn parse(body: &str) -> Result<String> {
        let response: ReverseResponse = decode(body, PROVIDER)?;
        Ok(Self::display_name(response))
    }

    // Points in the sea or outside coverage come back with an "error" field
    // and no name.
    fn display_name(response: ReverseResponse) -> String {
        match response.display_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNKNOWN_LOCATION.to_string(),
        }
    }
}

#[async_trait]
impl PlaceProvider for NominatimClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn reverse(&self, point: LngLat) -> Result<String> {
        debug!("Reverse geocoding {point}");

        let request = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", point.lat.to_string()),
                ("lon", point.lng.to_string()),
            ]);
        let response: ReverseResponse = get_json(request, PROVIDER).await?;
        Ok(Self::display_name(response))
    }
}
