#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use routelens::{
    providers::{PlaceProvider, ProviderError, RouteProvider},
    routing::routing::Navigator,
    structures::{LngLat, RouteGeometry, RouteQuery, RouteResult, TransportMode, ViewConfig},
};
use tokio::sync::Notify;

/// Route provider answering with a fixed distance, optionally parked until the
/// test releases it.
pub struct FakeRoutes {
    pub distance_m: f64,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub modes: Mutex<Vec<TransportMode>>,
    pub started: Arc<Notify>,
    pub gate: Option<Arc<Notify>>,
}

impl FakeRoutes {
    pub fn new(distance_m: f64) -> FakeRoutes {
        FakeRoutes {
            distance_m,
            fail: false,
            calls: AtomicUsize::new(0),
            modes: Mutex::new(Vec::new()),
            started: Arc::new(Notify::new()),
            gate: None,
        }
    }

    pub fn failing() -> FakeRoutes {
        FakeRoutes {
            fail: true,
            ..FakeRoutes::new(0.0)
        }
    }

    pub fn gated(distance_m: f64, gate: Arc<Notify>) -> FakeRoutes {
        FakeRoutes {
            gate: Some(gate),
            ..FakeRoutes::new(distance_m)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RouteProvider for FakeRoutes {
    fn name(&self) -> &str {
        "fake-routes"
    }

    async fn route(
        &self,
        query: &RouteQuery,
        mode: TransportMode,
    ) -> Result<RouteResult, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.modes.lock().unwrap().push(mode);
        self.started.notify_one();
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.fail {
            return Err(ProviderError::NoRoute {
                provider: "fake-routes".to_string(),
            });
        }
        Ok(RouteResult {
            geometry: RouteGeometry {
                kind: "LineString".to_string(),
                coordinates: vec![
                    [query.start.lng, query.start.lat],
                    [query.end.lng, query.end.lat],
                ],
            },
            distance_m: self.distance_m,
            duration_s: Some(600.0),
        })
    }
}

/// Names every point after its coordinates.
pub struct FakePlaces {
    pub fail: bool,
}

#[async_trait]
impl PlaceProvider for FakePlaces {
    fn name(&self) -> &str {
        "fake-places"
    }

    async fn reverse(&self, point: LngLat) -> Result<String, ProviderError> {
        if self.fail {
            return Err(ProviderError::Status {
                provider: "fake-places".to_string(),
                status: 503,
            });
        }
        Ok(format!("Place {point}"))
    }
}

pub fn navigator(routes: Arc<FakeRoutes>, places: FakePlaces) -> Arc<Navigator> {
    navigator_with(routes, places, ViewConfig::default())
}

pub fn navigator_with(
    routes: Arc<FakeRoutes>,
    places: FakePlaces,
    view: ViewConfig,
) -> Arc<Navigator> {
    Arc::new(Navigator::new(routes, Arc::new(places), view))
}

pub fn point(lng: f64, lat: f64) -> LngLat {
    LngLat::new(lng, lat).unwrap()
}
