use async_graphql::{Json, SimpleObject};

use crate::routing::policy::{RouteColor, route_color};
use crate::structures::{RouteGeometry, RouteResult, Selection};

pub const ROUTE_LAYER_ID: &str = "route";

/// Line layer the map widget draws, replacing any previous one with the same id.
#[derive(Debug, Clone, SimpleObject)]
pub struct PlanRouteLayer {
    pub id: &'static str,
    pub color: RouteColor,
    pub color_hex: &'static str,
    pub width: f64,
    pub distance_m: f64,
    pub duration_s: Option<f64>,
    pub geometry: Json<RouteGeometry>,
}

impl PlanRouteLayer {
    pub fn new(route: &RouteResult, selection: &Selection, width: f64) -> PlanRouteLayer {
        let color = route_color(selection.context, selection.preference);

        PlanRouteLayer {
            id: ROUTE_LAYER_ID,
            color,
            color_hex: color.hex(),
            width,
            distance_m: route.distance_m,
            duration_s: route.duration_s,
            geometry: Json(route.geometry.clone()),
        }
    }
}
