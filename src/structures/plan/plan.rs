use async_graphql::SimpleObject;

use crate::structures::{
    DisplayState, Endpoint, Lookup, PlanPlace, PlanRouteLayer, RouteResult, Selection,
    ViewConfig,
};

/// Result of a one-shot plan that does not touch the session.
#[derive(Debug, Clone, SimpleObject)]
pub struct Plan {
    pub selection: Selection,
    pub start: PlanPlace,
    pub end: PlanPlace,
    pub route: Option<PlanRouteLayer>,
    pub display: DisplayState,
    pub landmarks: Vec<String>,
    pub photos: Vec<String>,
}

impl Plan {
    pub fn new(
        selection: Selection,
        start: &Lookup<String>,
        end: &Lookup<String>,
        route: &Lookup<RouteResult>,
        config: &ViewConfig,
    ) -> Plan {
        Plan {
            selection,
            start: PlanPlace::from_lookup(Endpoint::Start, start),
            end: PlanPlace::from_lookup(Endpoint::End, end),
            route: route
                .ready()
                .map(|r| PlanRouteLayer::new(r, &selection, config.map.route_width)),
            display: DisplayState::project(&config.estimate, &selection, route),
            landmarks: config.highlights.landmarks.clone(),
            photos: config.highlights.photos.clone(),
        }
    }
}
