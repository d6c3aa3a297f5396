use async_graphql::SimpleObject;

use crate::routing::policy::{Banner, banner};
use crate::services::session::Session;
use crate::structures::{
    DisplayState, Endpoint, LngLat, PlanPlace, PlanRouteLayer, Selection, ViewConfig,
};

#[derive(Debug, Clone, SimpleObject)]
pub struct Marker {
    pub position: LngLat,
    pub color: String,
}

/// What the map page renders for the current session.
#[derive(Debug, Clone, SimpleObject)]
pub struct SessionView {
    pub selection: Selection,
    pub markers: Vec<Marker>,
    /// The info panel opens once both points are set.
    pub panel_visible: bool,
    pub start: Option<PlanPlace>,
    pub end: Option<PlanPlace>,
    pub route: Option<PlanRouteLayer>,
    pub display: Option<DisplayState>,
    pub banner: Banner,
    pub landmarks: Vec<String>,
    pub photos: Vec<String>,
}

impl SessionView {
    pub fn new(session: &Session, config: &ViewConfig) -> SessionView {
        let selection = *session.selection();
        let panel_visible = session.is_complete();

        let markers = session
            .points()
            .iter()
            .map(|p| Marker {
                position: *p,
                color: config.map.marker_color.clone(),
            })
            .collect();

        let places = session.places();
        let start = places
            .first()
            .map(|l| PlanPlace::from_lookup(Endpoint::Start, l));
        let end = places.get(1).map(|l| PlanPlace::from_lookup(Endpoint::End, l));

        let route = session
            .route()
            .and_then(|l| l.ready())
            .map(|r| PlanRouteLayer::new(r, &selection, config.map.route_width));
        let display = session
            .route()
            .map(|l| DisplayState::project(&config.estimate, &selection, l));

        let (landmarks, photos) = if panel_visible {
            (
                config.highlights.landmarks.clone(),
                config.highlights.photos.clone(),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        SessionView {
            selection,
            markers,
            panel_visible,
            start,
            end,
            route,
            display,
            banner: banner(selection.context),
            landmarks,
            photos,
        }
    }
}
