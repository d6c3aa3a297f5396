mod error;
mod http;
mod nominatim;
mod osrm;

use async_trait::async_trait;

pub use error::*;
pub use http::*;
pub use nominatim::*;
pub use osrm::*;

use crate::structures::{LngLat, RouteQuery, RouteResult, TransportMode};

/// Computes a line geometry and distance between two points.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn route(&self, query: &RouteQuery, mode: TransportMode) -> Result<RouteResult>;
}

/// Turns a coordinate into a human readable place name.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn reverse(&self, point: LngLat) -> Result<String>;
}
