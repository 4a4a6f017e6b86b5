use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_ZOOM_LEVEL: f64 = 13.;
pub const DEFAULT_PAN_DURATION_SECS: f64 = 1.;
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Tunables for the map and markers. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Zoom used both for the initial view and when panning to a workout.
    pub map_zoom_level: f64,
    pub pan_duration_secs: f64,
    pub tile_url: String,
    pub tile_attribution: String,
    pub popup_min_width: f64,
    pub popup_max_width: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            map_zoom_level: DEFAULT_ZOOM_LEVEL,
            pan_duration_secs: DEFAULT_PAN_DURATION_SECS,
            tile_url: DEFAULT_TILE_URL.into(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.into(),
            popup_min_width: 100.,
            popup_max_width: 250.,
        }
    }
}

impl TrackerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "map_zoom_level": 15, "pan_duration_secs": 0.5 }"#;
        let config = TrackerConfig::from_json(json).unwrap();
        assert_eq!(config.map_zoom_level, 15.);
        assert_eq!(config.pan_duration_secs, 0.5);
        assert_eq!(config.tile_url, DEFAULT_TILE_URL);
        assert_eq!(config.popup_max_width, 250.);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(TrackerConfig::from_json("{}").unwrap(), TrackerConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = TrackerConfig::from_json("{ map_zoom_level: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
