/// Why a single current-weather lookup produced no temperature.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Request failed with status: {0}")]
    Status(reqwest::StatusCode),
    #[error("Response has no current temperature")]
    MissingTemperature,
}

/// Errors surfaced to the caller of a heatmap tool.
#[derive(Debug, thiserror::Error)]
pub enum HeatmapError {
    #[error("Threshold t{index} must be within {min}..={max}, got {value}")]
    ThresholdOutOfRange {
        index: usize,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("No state reported a temperature")]
    NoData,
}
