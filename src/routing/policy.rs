//! Route styling and travel estimates derived from the user's selection.
//!
//! Everything here is a pure function of its inputs. The session calls into it
//! every time a view is projected, so nothing is cached.

use async_graphql::{Enum, SimpleObject};
use thiserror::Error;

use crate::structures::{
    EstimateConfig, RoutePreference, Selection, TransportMode, TravelContext,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    #[error("effective speed must be positive, got {0} km/h")]
    NonPositiveSpeed(f64),

    #[error("route distance must be a finite, non-negative number, got {0} km")]
    InvalidDistance(f64),
}

#[derive(Debug, Enum, Copy, Clone, PartialEq, Eq)]
pub enum RouteColor {
    Blue,
    Red,
    Purple,
    Yellow,
    Green,
}

impl RouteColor {
    pub fn hex(&self) -> &'static str {
        match self {
            RouteColor::Blue => "#1a73e8",
            RouteColor::Red => "#d32f2f",
            RouteColor::Purple => "#5e35b1",
            RouteColor::Yellow => "#f9a825",
            RouteColor::Green => "#2e7d32",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Banner {
    pub text: &'static str,
    pub background: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub time_min: f64,
}

impl Estimate {
    pub fn rounded_minutes(&self) -> i64 {
        self.time_min.round() as i64
    }

    /// Distance to two decimals, ties rounded away from zero.
    pub fn rounded_km(&self) -> f64 {
        (self.distance_km * 100.0).round() / 100.0
    }

    pub fn distance_label(&self) -> String {
        format!("Distance: {:.2} km", self.rounded_km())
    }

    pub fn time_label(&self) -> String {
        format!("Time: {} min", self.rounded_minutes())
    }
}

/// Context always wins, except that a normal trip on the impactful preference
/// is drawn green.
pub fn route_color(context: TravelContext, preference: RoutePreference) -> RouteColor {
    match (context, preference) {
        (TravelContext::Emergency, _) => RouteColor::Red,
        (TravelContext::LateNight, _) => RouteColor::Purple,
        (TravelContext::Delivery, _) => RouteColor::Yellow,
        (TravelContext::Normal, RoutePreference::Impactful) => RouteColor::Green,
        (TravelContext::Normal, RoutePreference::Fastest) => RouteColor::Blue,
    }
}

pub fn banner(context: TravelContext) -> Banner {
    match context {
        TravelContext::Emergency => Banner {
            text: "🚑 Emergency Mode: Fastest Response",
            background: "#ffcdd2",
        },
        TravelContext::LateNight => Banner {
            text: "🌙 Late Night Mode: Safety First",
            background: "#d1c4e9",
        },
        TravelContext::Delivery => Banner {
            text: "📦 Delivery Mode: Efficient Routing",
            background: "#fff9c4",
        },
        TravelContext::Normal => Banner {
            text: "Normal Navigation",
            background: "#e3f2fd",
        },
    }
}

pub fn effective_speed(
    config: &EstimateConfig,
    mode: TransportMode,
    context: TravelContext,
) -> Result<f64, PolicyError> {
    let mut speed = match mode {
        TransportMode::Car => config.car_speed,
        TransportMode::Bike => config.bike_speed,
    };
    if context == TravelContext::Emergency {
        speed += config.emergency_boost;
    }
    if context == TravelContext::LateNight {
        speed -= config.late_night_penalty;
    }

    if !speed.is_finite() || speed <= 0.0 {
        return Err(PolicyError::NonPositiveSpeed(speed));
    }
    Ok(speed)
}

pub fn estimate(
    config: &EstimateConfig,
    selection: &Selection,
    distance_km: f64,
) -> Result<Estimate, PolicyError> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(PolicyError::InvalidDistance(distance_km));
    }
    let speed_kmh = effective_speed(config, selection.mode, selection.context)?;

    let mut time_min = distance_km / speed_kmh * 60.0;
    if selection.preference == RoutePreference::Impactful {
        time_min += config.impactful_penalty_min;
    }

    Ok(Estimate {
        distance_km,
        speed_kmh,
        time_min,
    })
}
