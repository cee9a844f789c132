use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "us-heatmap/0.1.0";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Per-request timeout for a single current-weather lookup
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Number of lookups allowed in flight at once
pub const MAX_CONCURRENT_REQUESTS: usize = 15;

/// How long a fetched snapshot stays fresh
pub const SNAPSHOT_TTL: Duration = Duration::from_secs(600);

/// Shown instead of a map when no state reported a temperature
pub const NO_DATA_MESSAGE: &str = "Weather data unavailable, check the network connection.";

/// Runtime knobs for the fetch pipeline.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub api_base: String,
    pub request_timeout: Duration,
    pub max_concurrent_requests: usize,
    pub snapshot_ttl: Duration,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            api_base: OPEN_METEO_API_BASE.to_string(),
            request_timeout: REQUEST_TIMEOUT,
            max_concurrent_requests: MAX_CONCURRENT_REQUESTS,
            snapshot_ttl: SNAPSHOT_TTL,
        }
    }
}
