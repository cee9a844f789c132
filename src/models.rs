use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::registry::{Category, Location};

// ============================================================================
// Open-Meteo API Models
// ============================================================================

/// Body of `/forecast?current_weather=true`. Only the fields we read are kept.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub temperature: Option<f64>,
}

// ============================================================================
// Fetch Results
// ============================================================================

/// Outcome of one lookup. `temperature` is `None` when the lookup failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub location_id: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub temperature: Option<f64>,
    pub category: Category,
}

impl Reading {
    pub fn new(location: &Location, temperature: Option<f64>) -> Self {
        Self {
            location_id: location.id,
            lat: location.lat,
            lon: location.lon,
            temperature,
            category: location.category,
        }
    }

    /// Narrows to a displayable point, dropping readings without a temperature.
    pub fn into_map_point(self) -> Option<MapPoint> {
        let temperature_c = self.temperature?;
        Some(MapPoint {
            name: self.location_id,
            lat: self.lat,
            lon: self.lon,
            temperature_c,
            category: self.category,
        })
    }
}

/// A location with a known temperature, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub temperature_c: f64,
    pub category: Category,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

/// The five color-scale sliders. Omitted values fall back to slider defaults.
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ThresholdParams {
    /// Dark blue, extreme cold floor in °C (-40 to 0, default -10)
    pub t1: Option<f64>,
    /// Blue, cold in °C (-20 to 15, default 0)
    pub t2: Option<f64>,
    /// Pale yellow, mild in °C (-10 to 25, default 10)
    pub t3: Option<f64>,
    /// Orange red, warm in °C (0 to 35, default 20)
    pub t4: Option<f64>,
    /// Dark red, extreme heat ceiling in °C (15 to 50, default 30)
    pub t5: Option<f64>,
}

impl ThresholdParams {
    pub fn as_array(&self) -> [Option<f64>; 5] {
        [self.t1, self.t2, self.t3, self.t4, self.t5]
    }
}

/// Color thresholds and overlay toggle for one heat map render
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetHeatmapRequest {
    #[serde(flatten)]
    pub thresholds: ThresholdParams,
    /// Overlay major cities with their current temperature (default false)
    #[serde(default)]
    pub show_cities: bool,
}
