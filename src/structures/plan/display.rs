use async_graphql::SimpleObject;

use crate::routing::policy::{Banner, banner, estimate, route_color};
use crate::structures::{EstimateConfig, Lookup, LookupStatus, RouteResult, Selection};

/// Everything the info panel shows about the current route. Always rebuilt
/// from the selection and the latest route lookup.
#[derive(Debug, Clone, SimpleObject)]
pub struct DisplayState {
    pub status: LookupStatus,
    pub route_color: &'static str,
    pub banner: Banner,
    pub distance_km: Option<f64>,
    pub time_min: Option<i64>,
    pub distance_label: String,
    pub time_label: String,
    pub error: Option<String>,
}

impl DisplayState {
    pub fn project(
        config: &EstimateConfig,
        selection: &Selection,
        route: &Lookup<RouteResult>,
    ) -> DisplayState {
        let mut state = DisplayState {
            status: route.status(),
            route_color: route_color(selection.context, selection.preference).hex(),
            banner: banner(selection.context),
            distance_km: None,
            time_min: None,
            distance_label: "Distance: -".to_string(),
            time_label: "Time: -".to_string(),
            error: route.error().map(str::to_string),
        };

        match route {
            Lookup::Pending => {}
            Lookup::Failed(_) => state.mark_failed(),
            Lookup::Ready(result) => match estimate(config, selection, result.distance_km()) {
                Ok(estimate) => {
                    state.distance_km = Some(estimate.rounded_km());
                    state.time_min = Some(estimate.rounded_minutes());
                    state.distance_label = estimate.distance_label();
                    state.time_label = estimate.time_label();
                }
                Err(e) => {
                    state.status = LookupStatus::Failed;
                    state.error = Some(e.to_string());
                    state.mark_failed();
                }
            },
        }
        state
    }

    fn mark_failed(&mut self) {
        self.distance_label = "Distance: unavailable".to_string();
        self.time_label = "Time: unavailable".to_string();
    }
}
