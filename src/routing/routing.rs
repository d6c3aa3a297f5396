use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    providers::{PlaceProvider, RouteProvider},
    services::session::{PlaceTicket, RouteTicket, Session},
    structures::{
        LngLat, Lookup, RoutePreference, RouteQuery, RouteResult, Selection, TransportMode,
        TravelContext, ViewConfig,
        plan::{MapStyle, Plan, SessionView},
    },
};

/// Owns the session and drives the providers on its behalf.
///
/// The session lock is only held to read or update state, never while waiting
/// on a provider, so a reset or selector change is never blocked by a slow
/// lookup. Lookups that finish after their inputs changed are discarded by the
/// session.
pub struct Navigator {
    routes: Arc<dyn RouteProvider>,
    places: Arc<dyn PlaceProvider>,
    view: ViewConfig,
    session: Mutex<Session>,
}

impl Navigator {
    pub fn new(
        routes: Arc<dyn RouteProvider>,
        places: Arc<dyn PlaceProvider>,
        view: ViewConfig,
    ) -> Navigator {
        let session = Session::with_selection(view.selection);
        Navigator {
            routes,
            places,
            view,
            session: Mutex::new(session),
        }
    }

    pub fn map_style(&self) -> MapStyle {
        MapStyle::from_config(&self.view.map)
    }

    pub async fn session(&self) -> SessionView {
        let session = self.session.lock().await;
        SessionView::new(&session, &self.view)
    }

    pub async fn add_point(&self, point: LngLat) -> SessionView {
        let added = self.session.lock().await.add_point(point);
        let Some(added) = added else {
            return self.session().await;
        };
        info!("Added point {} at {point}", added.place.index + 1);

        match added.route {
            Some(ticket) => {
                let (place, route) =
                    tokio::join!(self.locate(added.place), self.fetch_route(ticket));

                let mut session = self.session.lock().await;
                session.commit_place(added.place, place);
                session.commit_route(ticket, route);
                SessionView::new(&session, &self.view)
            }
            None => {
                let place = self.locate(added.place).await;

                let mut session = self.session.lock().await;
                session.commit_place(added.place, place);
                SessionView::new(&session, &self.view)
            }
        }
    }

    pub async fn set_preference(&self, preference: RoutePreference) -> SessionView {
        let mut session = self.session.lock().await;
        session.set_preference(preference);
        SessionView::new(&session, &self.view)
    }

    pub async fn set_context(&self, context: TravelContext) -> SessionView {
        let mut session = self.session.lock().await;
        session.set_context(context);
        SessionView::new(&session, &self.view)
    }

    pub async fn set_mode(&self, mode: TransportMode) -> SessionView {
        let ticket = self.session.lock().await.set_mode(mode);
        let Some(ticket) = ticket else {
            return self.session().await;
        };

        let route = self.fetch_route(ticket).await;
        let mut session = self.session.lock().await;
        session.commit_route(ticket, route);
        SessionView::new(&session, &self.view)
    }

    pub async fn reset(&self) -> SessionView {
        let mut session = self.session.lock().await;
        session.reset();
        info!("Session reset");
        SessionView::new(&session, &self.view)
    }

    /// Looks up both endpoints and the route at once without touching the
    /// session.
    pub async fn plan(&self, query: RouteQuery, selection: Selection) -> Plan {
        let (start, end, route) = tokio::join!(
            self.reverse(query.start),
            self.reverse(query.end),
            self.request_route(&query, selection.mode),
        );
        Plan::new(selection, &start, &end, &route, &self.view)
    }

    async fn locate(&self, ticket: PlaceTicket) -> Lookup<String> {
        self.reverse(ticket.point).await
    }

    async fn fetch_route(&self, ticket: RouteTicket) -> Lookup<RouteResult> {
        self.request_route(&ticket.query, ticket.mode).await
    }

    async fn reverse(&self, point: LngLat) -> Lookup<String> {
        match self.places.reverse(point).await {
            Ok(address) => Lookup::Ready(address),
            Err(e) => {
                warn!("{} failed to locate {point}: {e}", self.places.name());
                Lookup::Failed(e.to_string())
            }
        }
    }

    async fn request_route(&self, query: &RouteQuery, mode: TransportMode) -> Lookup<RouteResult> {
        match self.routes.route(query, mode).await {
            Ok(route) => {
                info!(
                    "{} routed {} -> {} by {}: {:.2} km",
                    self.routes.name(),
                    query.start,
                    query.end,
                    mode.profile(),
                    route.distance_km()
                );
                Lookup::Ready(route)
            }
            Err(e) => {
                warn!("{} failed to route: {e}", self.routes.name());
                Lookup::Failed(e.to_string())
            }
        }
    }
}
