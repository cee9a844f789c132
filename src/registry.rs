//! Static table of the places shown on the map.
//!
//! States are keyed by their two-letter postal code so the choropleth can
//! match them against Plotly's `USA-states` location mode. Coordinates are
//! rough geographic centers; cities use their downtown coordinates.

use serde::Serialize;

/// Whether a location is colored as a region or drawn as a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    State,
    City,
}

/// A named coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub id: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub category: Category,
}

const fn state(id: &'static str, lat: f64, lon: f64) -> Location {
    Location {
        id,
        lat,
        lon,
        category: Category::State,
    }
}

const fn city(id: &'static str, lat: f64, lon: f64) -> Location {
    Location {
        id,
        lat,
        lon,
        category: Category::City,
    }
}

pub const STATES: [Location; 50] = [
    state("AL", 32.8066, -86.7911),
    state("AK", 61.3707, -152.4044),
    state("AZ", 33.7298, -111.4312),
    state("AR", 34.9697, -92.3731),
    state("CA", 36.1162, -119.6816),
    state("CO", 39.0598, -105.3111),
    state("CT", 41.5978, -72.7554),
    state("DE", 39.3185, -75.5071),
    state("FL", 27.7663, -81.6868),
    state("GA", 33.0406, -83.6431),
    state("HI", 21.0943, -157.4983),
    state("ID", 44.2405, -114.4788),
    state("IL", 40.3495, -88.9861),
    state("IN", 39.8494, -86.2583),
    state("IA", 42.0115, -93.2105),
    state("KS", 38.5266, -96.7265),
    state("KY", 37.6681, -84.6701),
    state("LA", 31.1695, -91.8678),
    state("ME", 44.6939, -69.3819),
    state("MD", 39.0639, -76.8021),
    state("MA", 42.2302, -71.5301),
    state("MI", 43.3266, -84.5361),
    state("MN", 45.6945, -93.9002),
    state("MS", 32.7416, -89.6787),
    state("MO", 38.4561, -92.2884),
    state("MT", 46.9219, -110.4544),
    state("NE", 41.1254, -98.2681),
    state("NV", 38.3135, -117.0554),
    state("NH", 43.7932, -71.5925),
    state("NJ", 40.2989, -74.5210),
    state("NM", 34.8405, -106.2485),
    state("NY", 42.1657, -74.9481),
    state("NC", 35.6301, -79.8064),
    state("ND", 47.5289, -99.7840),
    state("OH", 40.3888, -82.7649),
    state("OK", 35.5653, -96.9289),
    state("OR", 44.5720, -122.0709),
    state("PA", 40.5908, -77.2098),
    state("RI", 41.6809, -71.5118),
    state("SC", 33.8569, -80.9450),
    state("SD", 44.2998, -99.4388),
    state("TN", 35.7478, -86.6923),
    state("TX", 31.0545, -97.5635),
    state("UT", 40.1500, -111.8624),
    state("VT", 44.0459, -72.7107),
    state("VA", 37.7693, -78.1699),
    state("WA", 47.4009, -121.4905),
    state("WV", 38.4912, -80.9545),
    state("WI", 44.2685, -89.6165),
    state("WY", 42.7560, -107.3025),
];

pub const CITIES: [Location; 20] = [
    city("New York", 40.7128, -74.0060),
    city("Los Angeles", 34.0522, -118.2437),
    city("Chicago", 41.8781, -87.6298),
    city("Houston", 29.7604, -95.3698),
    city("Phoenix", 33.4484, -112.0740),
    city("Philadelphia", 39.9526, -75.1652),
    city("San Antonio", 29.4241, -98.4936),
    city("San Diego", 32.7157, -117.1611),
    city("Dallas", 32.7767, -96.7970),
    city("San Jose", 37.3382, -121.8863),
    city("Austin", 30.2672, -97.7431),
    city("Seattle", 47.6062, -122.3321),
    city("Denver", 39.7392, -104.9903),
    city("Washington DC", 38.9072, -77.0369),
    city("Boston", 42.3601, -71.0589),
    city("Las Vegas", 36.1699, -115.1398),
    city("Miami", 25.7617, -80.1918),
    city("Atlanta", 33.7490, -84.3880),
    city("Honolulu", 21.3069, -157.8583),
    city("Anchorage", 61.2181, -149.9003),
];

/// Every registered location, states first.
pub fn all_locations() -> Vec<Location> {
    STATES.iter().chain(CITIES.iter()).copied().collect()
}
