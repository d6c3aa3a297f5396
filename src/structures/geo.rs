use std::fmt::Display;

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in the (longitude, latitude) order used by the routing
/// provider and the map widget.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl Display for LngLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Result<Self, String> {
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(format!("Longitude out of range: {lng}"));
        }
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(format!("Latitude out of range: {lat}"));
        }
        Ok(LngLat { lng, lat })
    }
}

/// The two endpoints of a route request. Only exists once both are known.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RouteQuery {
    pub start: LngLat,
    pub end: LngLat,
}

/// GeoJSON line geometry as returned by the routing provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub geometry: RouteGeometry,
    pub distance_m: f64,
    pub duration_s: Option<f64>,
}

impl RouteResult {
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}
