use anyhow::Result;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::sync::Arc;

use crate::constants::{HeatmapConfig, USER_AGENT};
use crate::error::FetchError;
use crate::models::{CurrentWeatherResponse, Reading};
use crate::registry::Location;

/// Looks up current temperatures from Open-Meteo, many locations at a time.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    client: Arc<Client>,
    api_base: String,
    max_concurrent_requests: usize,
}

impl WeatherFetcher {
    pub fn new(config: &HeatmapConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            max_concurrent_requests: config.max_concurrent_requests.max(1),
        })
    }

    /// Fetches the current temperature in °C for one coordinate.
    async fn fetch_temperature(&self, location: &Location) -> Result<f64, FetchError> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true",
            self.api_base, location.lat, location.lon
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let data = response.json::<CurrentWeatherResponse>().await?;
        data.current_weather
            .and_then(|c| c.temperature)
            .ok_or(FetchError::MissingTemperature)
    }

    /// Never fails: any error becomes a reading with no temperature.
    pub async fn fetch_one(&self, location: &Location) -> Reading {
        match self.fetch_temperature(location).await {
            Ok(temperature) => Reading::new(location, Some(temperature)),
            Err(e) => {
                tracing::debug!("No reading for {}: {}", location.id, e);
                Reading::new(location, None)
            }
        }
    }

    /// Fetches every location with bounded concurrency and waits for all of them.
    ///
    /// Returns one reading per input, in completion order.
    pub async fn fetch_all(&self, locations: &[Location]) -> Vec<Reading> {
        let readings: Vec<Reading> = stream::iter(locations.iter().copied())
            .map(|location| async move { self.fetch_one(&location).await })
            .buffer_unordered(self.max_concurrent_requests)
            .collect()
            .await;

        let missing = readings.iter().filter(|r| r.temperature.is_none()).count();
        tracing::info!(
            "Fetched {} of {} locations ({} without a reading)",
            readings.len() - missing,
            readings.len(),
            missing
        );

        readings
    }
}
