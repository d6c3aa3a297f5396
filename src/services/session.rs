//! Per-process navigation session: the picked points, their addresses, the
//! current route and the user's selection.
//!
//! Provider calls happen outside the session. Callers receive a ticket when
//! they start a lookup and hand it back with the result; results carrying an
//! outdated ticket are dropped.

use tracing::debug;

use crate::structures::{
    LngLat, Lookup, RoutePreference, RouteQuery, RouteResult, Selection, TransportMode,
    TravelContext,
};

pub const MAX_POINTS: usize = 2;

/// Identifies which set of points a geocoding result belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceTicket {
    pub epoch: u64,
    pub index: usize,
    pub point: LngLat,
}

/// A route lookup to run. `generation` changes whenever the query or the
/// transport mode does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteTicket {
    pub generation: u64,
    pub query: RouteQuery,
    pub mode: TransportMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointAdded {
    pub place: PlaceTicket,
    pub route: Option<RouteTicket>,
}

#[derive(Debug, Default)]
pub struct Session {
    points: Vec<LngLat>,
    places: Vec<Lookup<String>>,
    route: Option<Lookup<RouteResult>>,
    selection: Selection,
    epoch: u64,
    route_generation: u64,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn with_selection(selection: Selection) -> Session {
        Session {
            selection,
            ..Session::default()
        }
    }

    pub fn points(&self) -> &[LngLat] {
        &self.points
    }

    pub fn places(&self) -> &[Lookup<String>] {
        &self.places
    }

    pub fn route(&self) -> Option<&Lookup<RouteResult>> {
        self.route.as_ref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn query(&self) -> Option<RouteQuery> {
        match self.points.as_slice() {
            [start, end] => Some(RouteQuery {
                start: *start,
                end: *end,
            }),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.points.len() == MAX_POINTS
    }

    /// Returns `None` when both points are already set.
    pub fn add_point(&mut self, point: LngLat) -> Option<PointAdded> {
        if self.is_complete() {
            debug!("Ignoring point {point}: route already has two points");
            return None;
        }

        self.points.push(point);
        self.places.push(Lookup::Pending);
        let place = PlaceTicket {
            epoch: self.epoch,
            index: self.points.len() - 1,
            point,
        };

        let route = if self.is_complete() {
            self.next_route_ticket()
        } else {
            None
        };

        Some(PointAdded { place, route })
    }

    pub fn set_preference(&mut self, preference: RoutePreference) {
        self.selection.preference = preference;
    }

    pub fn set_context(&mut self, context: TravelContext) {
        self.selection.context = context;
    }

    /// The mode picks the provider profile, so a change invalidates the route.
    pub fn set_mode(&mut self, mode: TransportMode) -> Option<RouteTicket> {
        if self.selection.mode == mode {
            return None;
        }
        self.selection.mode = mode;
        self.next_route_ticket()
    }

    pub fn reset(&mut self) {
        self.points.clear();
        self.places.clear();
        self.route = None;
        self.epoch += 1;
        self.route_generation += 1;
    }

    pub fn commit_place(&mut self, ticket: PlaceTicket, lookup: Lookup<String>) -> bool {
        if ticket.epoch != self.epoch {
            debug!(
                "Dropping stale address for {} (epoch {} != {})",
                ticket.point, ticket.epoch, self.epoch
            );
            return false;
        }
        match self.places.get_mut(ticket.index) {
            Some(slot) => {
                *slot = lookup;
                true
            }
            None => false,
        }
    }

    pub fn commit_route(&mut self, ticket: RouteTicket, lookup: Lookup<RouteResult>) -> bool {
        if ticket.generation != self.route_generation {
            debug!(
                "Dropping stale route (generation {} != {})",
                ticket.generation, self.route_generation
            );
            return false;
        }
        self.route = Some(lookup);
        true
    }

    fn next_route_ticket(&mut self) -> Option<RouteTicket> {
        let query = self.query()?;
        self.route_generation += 1;
        self.route = Some(Lookup::Pending);

        Some(RouteTicket {
            generation: self.route_generation,
            query,
            mode: self.selection.mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::RouteGeometry;

    fn point(lng: f64, lat: f64) -> LngLat {
        LngLat::new(lng, lat).unwrap()
    }

    fn result(distance_m: f64) -> RouteResult {
        RouteResult {
            geometry: RouteGeometry {
                kind: "LineString".to_string(),
                coordinates: vec![],
            },
            distance_m,
            duration_s: None,
        }
    }

    #[test]
    fn second_point_starts_a_route() {
        let mut session = Session::new();

        let first = session.add_point(point(73.85, 18.52)).unwrap();
        assert_eq!(first.place.index, 0);
        assert!(first.route.is_none());
        assert!(session.query().is_none());

        let second = session.add_point(point(73.9, 18.55)).unwrap();
        assert_eq!(second.place.index, 1);
        let ticket = second.route.unwrap();
        assert_eq!(ticket.query.start, point(73.85, 18.52));
        assert_eq!(ticket.query.end, point(73.9, 18.55));
        assert_eq!(ticket.mode, TransportMode::Car);
        assert_eq!(session.route(), Some(&Lookup::Pending));
    }

    #[test]
    fn third_point_is_ignored() {
        let mut session = Session::new();
        session.add_point(point(1.0, 1.0));
        session.add_point(point(2.0, 2.0));

        assert!(session.add_point(point(3.0, 3.0)).is_none());
        assert_eq!(session.points(), &[point(1.0, 1.0), point(2.0, 2.0)]);
        assert_eq!(session.places().len(), 2);
    }

    #[test]
    fn reset_returns_to_first_load() {
        let mut session = Session::new();
        session.set_context(TravelContext::Delivery);
        session.add_point(point(1.0, 1.0));
        let added = session.add_point(point(2.0, 2.0)).unwrap();
        assert!(session.commit_route(added.route.unwrap(), Lookup::Ready(result(100.0))));

        session.reset();
        session.reset();
        assert!(session.points().is_empty());
        assert!(session.places().is_empty());
        assert!(session.route().is_none());
        assert!(session.query().is_none());
        assert_eq!(session.selection().context, TravelContext::Delivery);

        let first = session.add_point(point(5.0, 5.0)).unwrap();
        assert_eq!(first.place.index, 0);
        assert!(first.route.is_none());
        assert!(session.add_point(point(6.0, 6.0)).unwrap().route.is_some());
    }

    #[test]
    fn results_from_before_reset_are_dropped() {
        let mut session = Session::new();
        let first = session.add_point(point(1.0, 1.0)).unwrap();
        let second = session.add_point(point(2.0, 2.0)).unwrap();

        session.reset();
        session.add_point(point(7.0, 7.0));

        assert!(!session.commit_place(first.place, Lookup::Ready("Old".to_string())));
        assert!(!session.commit_route(second.route.unwrap(), Lookup::Ready(result(1.0))));
        assert_eq!(session.places(), &[Lookup::Pending]);
        assert!(session.route().is_none());
    }

    #[test]
    fn first_address_survives_second_click() {
        let mut session = Session::new();
        let first = session.add_point(point(1.0, 1.0)).unwrap();
        session.add_point(point(2.0, 2.0));

        assert!(session.commit_place(first.place, Lookup::Ready("Start".to_string())));
        assert_eq!(session.places()[0], Lookup::Ready("Start".to_string()));
    }

    #[test]
    fn mode_change_supersedes_pending_route() {
        let mut session = Session::new();
        session.add_point(point(1.0, 1.0));
        let car = session.add_point(point(2.0, 2.0)).unwrap().route.unwrap();

        let bike = session.set_mode(TransportMode::Bike).unwrap();
        assert_eq!(bike.mode, TransportMode::Bike);
        assert!(session.set_mode(TransportMode::Bike).is_none());

        assert!(session.commit_route(bike, Lookup::Ready(result(2.0))));
        assert!(!session.commit_route(car, Lookup::Ready(result(1.0))));
        assert_eq!(session.route().and_then(|r| r.ready()).map(|r| r.distance_m), Some(2.0));
    }

    #[test]
    fn configured_selection_drives_first_route() {
        let mut session = Session::with_selection(Selection {
            mode: TransportMode::Bike,
            ..Selection::default()
        });
        session.add_point(point(1.0, 1.0));
        let ticket = session.add_point(point(2.0, 2.0)).unwrap().route.unwrap();
        assert_eq!(ticket.mode, TransportMode::Bike);
    }

    #[test]
    fn mode_change_without_points_only_updates_selection() {
        let mut session = Session::new();
        assert!(session.set_mode(TransportMode::Bike).is_none());
        assert_eq!(session.selection().mode, TransportMode::Bike);

        session.add_point(point(1.0, 1.0));
        let ticket = session.add_point(point(2.0, 2.0)).unwrap().route.unwrap();
        assert_eq!(ticket.mode, TransportMode::Bike);
    }
}
