use async_graphql::{Enum, SimpleObject};
use serde::Deserialize;

#[derive(Debug, Enum, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum RoutePreference {
    #[default]
    Fastest,
    Impactful,
}

#[derive(Debug, Enum, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TravelContext {
    #[default]
    Normal,
    Emergency,
    LateNight,
    Delivery,
}

#[derive(Debug, Enum, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TransportMode {
    #[default]
    Car,
    Bike,
}

impl From<String> for RoutePreference {
    fn from(value: String) -> Self {
        RoutePreference::from_value(&value)
    }
}

impl From<String> for TravelContext {
    fn from(value: String) -> Self {
        TravelContext::from_value(&value)
    }
}

impl From<String> for TransportMode {
    fn from(value: String) -> Self {
        TransportMode::from_value(&value)
    }
}

impl RoutePreference {
    /// Anything other than "impactful" is the fastest route.
    pub fn from_value(value: &str) -> RoutePreference {
        match value {
            "impactful" => RoutePreference::Impactful,
            _ => RoutePreference::Fastest,
        }
    }
}

impl TravelContext {
    /// Selector values as the map page sends them. Unknown values fall back to
    /// normal navigation.
    pub fn from_value(value: &str) -> TravelContext {
        match value {
            "emergency" => TravelContext::Emergency,
            "late-night" => TravelContext::LateNight,
            "delivery" => TravelContext::Delivery,
            _ => TravelContext::Normal,
        }
    }
}

impl TransportMode {
    pub fn from_value(value: &str) -> TransportMode {
        match value {
            "bike" => TransportMode::Bike,
            _ => TransportMode::Car,
        }
    }

    /// Profile segment of the routing provider URL.
    pub fn profile(&self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Bike => "bike",
        }
    }
}

/// Everything the user picked besides the points themselves. Read from the
/// config with the same selector values the map page uses.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, SimpleObject)]
#[serde(default)]
pub struct Selection {
    pub preference: RoutePreference,
    pub context: TravelContext,
    pub mode: TransportMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_first_load() {
        let s = Selection::default();
        assert_eq!(s.preference, RoutePreference::Fastest);
        assert_eq!(s.context, TravelContext::Normal);
        assert_eq!(s.mode, TransportMode::Car);
    }

    #[test]
    fn lenient_values() {
        assert_eq!(TravelContext::from_value("late-night"), TravelContext::LateNight);
        assert_eq!(TravelContext::from_value("rush-hour"), TravelContext::Normal);
        assert_eq!(TransportMode::from_value("bike"), TransportMode::Bike);
        assert_eq!(TransportMode::from_value("walk"), TransportMode::Car);
        assert_eq!(RoutePreference::from_value("impactful"), RoutePreference::Impactful);
        assert_eq!(RoutePreference::from_value(""), RoutePreference::Fastest);
        assert_eq!(TransportMode::Bike.profile(), "bike");
    }
}
