use std::fs;

use serde::Deserialize;

use crate::structures::Selection;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub providers: ProvidersConfig,
    pub map: MapConfig,
    pub estimate: EstimateConfig,
    pub highlights: HighlightsConfig,
    /// Selector values a new or reset session starts with.
    pub selection: Selection,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub routing_url: String,
    pub geocoding_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tiles: Vec<String>,
    pub tile_size: u32,
    pub center: [f64; 2],
    pub zoom: f64,
    pub marker_color: String,
    pub route_width: f64,
}

/// Speeds are km/h, the impactful penalty is in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    pub car_speed: f64,
    pub bike_speed: f64,
    pub emergency_boost: f64,
    pub late_night_penalty: f64,
    pub impactful_penalty_min: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightsConfig {
    pub landmarks: Vec<String>,
    pub photos: Vec<String>,
}

/// The parts of the configuration the navigator needs: how to project views
/// and which selection a session starts from.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub estimate: EstimateConfig,
    pub map: MapConfig,
    pub highlights: HighlightsConfig,
    pub selection: Selection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            routing_url: "https://router.project-osrm.org".to_string(),
            geocoding_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("routelens/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            tiles: ["a", "b", "c"]
                .iter()
                .map(|s| format!("https://{s}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png"))
                .collect(),
            tile_size: 256,
            center: [73.8567, 18.5204],
            zoom: 12.0,
            marker_color: "#e53935".to_string(),
            route_width: 5.0,
        }
    }
}

impl Default for EstimateConfig {
    fn default() -> Self {
        EstimateConfig {
            car_speed: 35.0,
            bike_speed: 45.0,
            emergency_boost: 10.0,
            late_night_penalty: 5.0,
            impactful_penalty_min: 3.0,
        }
    }
}

impl Default for HighlightsConfig {
    fn default() -> Self {
        HighlightsConfig {
            landmarks: vec![
                "Public transport access".to_string(),
                "Residential area".to_string(),
                "Street lighting".to_string(),
            ],
            photos: vec![
                "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?w=600".to_string(),
                "https://images.unsplash.com/photo-1500534623283-312aade485b7?w=600".to_string(),
            ],
        }
    }
}

impl ProvidersConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("providers.timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}

impl EstimateConfig {
    /// Every mode/context combination must end up with a positive speed.
    pub fn validate(&self) -> Result<(), String> {
        let values = [
            ("car_speed", self.car_speed),
            ("bike_speed", self.bike_speed),
            ("emergency_boost", self.emergency_boost),
            ("late_night_penalty", self.late_night_penalty),
            ("impactful_penalty_min", self.impactful_penalty_min),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(format!("estimate.{name} must be a finite number"));
            }
        }
        if self.impactful_penalty_min < 0.0 {
            return Err(format!(
                "estimate.impactful_penalty_min must not be negative, got {}",
                self.impactful_penalty_min
            ));
        }
        for (name, base) in [("car_speed", self.car_speed), ("bike_speed", self.bike_speed)] {
            if base <= 0.0 {
                return Err(format!("estimate.{name} must be positive, got {base}"));
            }
            if base + self.emergency_boost <= 0.0 || base - self.late_night_penalty <= 0.0 {
                return Err(format!(
                    "estimate.{name} of {base} km/h becomes non-positive after context adjustments"
                ));
            }
        }
        Ok(())
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, String> {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config: {e}"))?;
        Config::parse(&content)
    }

    pub fn view(&self) -> ViewConfig {
        ViewConfig {
            estimate: self.estimate,
            map: self.map.clone(),
            highlights: self.highlights.clone(),
            selection: self.selection,
        }
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let config: Config =
            serde_yml::from_str(content).map_err(|e| format!("Failed to parse config: {e}"))?;
        config.estimate.validate()?;
        config.providers.validate()?;
        if config.map.tiles.is_empty() {
            return Err("map.tiles must list at least one tile URL".to_string());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{RoutePreference, TransportMode, TravelContext};

    #[test]
    fn empty_sections_fall_back_to_defaults() {
        let config = Config::parse("server:\n  bind: 0.0.0.0:8080\n").unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.estimate, EstimateConfig::default());
        assert_eq!(config.map.tiles.len(), 3);
        assert_eq!(
            config.map.tiles[0],
            "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png"
        );
        assert_eq!(config.highlights.landmarks.len(), 3);
    }

    #[test]
    fn partial_estimate_section_keeps_other_defaults() {
        let config = Config::parse("estimate:\n  car_speed: 50\n").unwrap();
        assert_eq!(config.estimate.car_speed, 50.0);
        assert_eq!(config.estimate.bike_speed, 45.0);
    }

    #[test]
    fn rejects_speeds_that_reach_zero() {
        let err = Config::parse("estimate:\n  car_speed: 5\n").unwrap_err();
        assert!(err.contains("car_speed"), "{err}");

        let err = Config::parse("estimate:\n  bike_speed: -1\n").unwrap_err();
        assert!(err.contains("bike_speed"), "{err}");
    }

    #[test]
    fn rejects_negative_penalty_and_zero_timeout() {
        let err = Config::parse("estimate:\n  impactful_penalty_min: -3\n").unwrap_err();
        assert!(err.contains("impactful_penalty_min"), "{err}");

        let err = Config::parse("providers:\n  timeout_secs: 0\n").unwrap_err();
        assert!(err.contains("timeout_secs"), "{err}");
    }

    #[test]
    fn selection_uses_page_values_leniently() {
        let config =
            Config::parse("selection:\n  context: late-night\n  mode: bike\n").unwrap();
        assert_eq!(config.selection.context, TravelContext::LateNight);
        assert_eq!(config.selection.mode, TransportMode::Bike);
        assert_eq!(config.selection.preference, RoutePreference::Fastest);

        let config = Config::parse(
            "selection:\n  context: rush-hour\n  mode: walk\n  preference: scenic\n",
        )
        .unwrap();
        assert_eq!(config.selection, Selection::default());
        assert_eq!(config.view().selection, Selection::default());
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(Config::parse("server: [").is_err());
    }
}
