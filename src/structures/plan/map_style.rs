use std::collections::BTreeMap;

use async_graphql::{Json, SimpleObject};
use serde::Serialize;

use crate::structures::MapConfig;

/// Style document in the shape map widgets expect (style version 8) with
/// a single raster basemap.
#[derive(Debug, Clone, Serialize)]
pub struct StyleDocument {
    pub version: u8,
    pub sources: BTreeMap<String, RasterSource>,
    pub layers: Vec<StyleLayer>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterSource {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub tiles: Vec<String>,
    pub tile_size: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleLayer {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub source: String,
}

#[derive(Debug, Clone, SimpleObject)]
pub struct MapStyle {
    pub style: Json<StyleDocument>,
    /// Longitude, latitude.
    pub center: Vec<f64>,
    pub zoom: f64,
    pub marker_color: String,
    pub route_width: f64,
}

impl MapStyle {
    pub fn from_config(config: &MapConfig) -> MapStyle {
        let mut sources = BTreeMap::new();
        sources.insert(
            "osm".to_string(),
            RasterSource {
                kind: "raster",
                tiles: config.tiles.clone(),
                tile_size: config.tile_size,
            },
        );

        MapStyle {
            style: Json(StyleDocument {
                version: 8,
                sources,
                layers: vec![StyleLayer {
                    id: "osm".to_string(),
                    kind: "raster",
                    source: "osm".to_string(),
                }],
            }),
            center: config.center.to_vec(),
            zoom: config.zoom,
            marker_color: config.marker_color.clone(),
            route_width: config.route_width,
        }
    }
}
