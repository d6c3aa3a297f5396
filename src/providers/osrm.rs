use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::providers::{ProviderError, Result, RouteProvider, decode, get_json};
use crate::structures::{RouteGeometry, RouteQuery, RouteResult, TransportMode};

const PROVIDER: &str = "osrm";

#[derive(Debug, Deserialize)]
struct OsrmResponse {
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: RouteGeometry,
    distance: f64,
    duration: Option<f64>,
}

/// Client for an OSRM `route/v1` endpoint.
pub struct OsrmClient {
    client: Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(client: Client, base_url: &str) -> OsrmClient {
        OsrmClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn route_url(&self, query: &RouteQuery, mode: TransportMode) -> String {
        format!(
            "{}/route/v1/{}/{};{}",
            self.base_url,
            mode.profile(),
            query.start,
            query.end
        )
    }

    /// Keeps the first route of a response, which is the one the provider ranks
    /// best.
    pub fn parse(body: &str) -> Result<RouteResult> {
        let response: OsrmResponse = decode(body, PROVIDER)?;
        Self::first_route(response)
    }

    fn first_route(response: OsrmResponse) -> Result<RouteResult> {
        if let Some(code) = response.code {
            if code != "Ok" {
                return Err(ProviderError::Declined {
                    provider: PROVIDER.to_string(),
                    code: match response.message {
                        Some(message) => format!("{code} ({message})"),
                        None => code,
                    },
                });
            }
        }

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NoRoute {
                provider: PROVIDER.to_string(),
            })?;

        if !route.distance.is_finite() || route.distance < 0.0 {
            return Err(ProviderError::Malformed {
                provider: PROVIDER.to_string(),
                reason: format!("invalid distance {}", route.distance),
            });
        }

        Ok(RouteResult {
            geometry: route.geometry,
            distance_m: route.distance,
            duration_s: route.duration,
        })
    }
}

#[async_trait]
impl RouteProvider for OsrmClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn route(&self, query: &RouteQuery, mode: TransportMode) -> Result<RouteResult> {
        let url = self.route_url(query, mode);
        debug!("Requesting route {url}");

        let request = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")]);
        let response: OsrmResponse = get_json(request, PROVIDER).await?;
        Self::first_route(response)
    }
}
