use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::cache::TimedCache;
use crate::color_scale::{resolve_thresholds, ColorScale};
use crate::constants::{HeatmapConfig, NO_DATA_MESSAGE};
use crate::error::HeatmapError;
use crate::fetcher::WeatherFetcher;
use crate::figure::build_figure;
use crate::formatters::{format_summary, format_tables};
use crate::models::{GetHeatmapRequest, ThresholdParams};
use crate::registry::{all_locations, Location};
use crate::snapshot::Snapshot;

/// Heat map service that handles MCP requests
#[derive(Clone)]
pub struct Heatmap {
    fetcher: WeatherFetcher,
    locations: Arc<Vec<Location>>,
    cache: Arc<Mutex<TimedCache<Arc<Snapshot>>>>,
    tool_router: ToolRouter<Self>,
}

impl Heatmap {
    pub fn new(config: HeatmapConfig) -> Result<Self> {
        Ok(Self {
            fetcher: WeatherFetcher::new(&config)?,
            locations: Arc::new(all_locations()),
            cache: Arc::new(Mutex::new(TimedCache::new(config.snapshot_ttl))),
            tool_router: Self::tool_router(),
        })
    }

    /// Returns the cached snapshot, refetching everything once it has expired.
    ///
    /// The lock is held across the fetch so concurrent callers share one refresh.
    async fn snapshot(&self) -> Arc<Snapshot> {
        let mut cache = self.cache.lock().await;
        if let Some(snapshot) = cache.get(Instant::now()) {
            tracing::debug!("Serving cached snapshot");
            return Arc::clone(snapshot);
        }

        tracing::info!("Fetching current weather for {} locations", self.locations.len());
        let readings = self.fetcher.fetch_all(&self.locations).await;
        let snapshot = Arc::new(Snapshot::from_readings(readings));
        Arc::clone(cache.insert(snapshot, Instant::now()))
    }

    fn color_scale(params: &ThresholdParams) -> Result<ColorScale, McpError> {
        let thresholds = resolve_thresholds(params.as_array())
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        Ok(ColorScale::from_thresholds(thresholds))
    }

    fn no_data(err: HeatmapError) -> CallToolResult {
        tracing::warn!("{}", err);
        CallToolResult::error(vec![Content::text(NO_DATA_MESSAGE)])
    }
}

#[tool_handler]
impl ServerHandler for Heatmap {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "us-heatmap".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Live temperature heat map of the 50 US states and 20 major cities, powered by \
                Open-Meteo. Returns Plotly figure JSON with a color scale tuned by five thresholds."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Heatmap {
    /// Builds the heat map figure for the given color thresholds
    #[tool(description = "Get a live US temperature heat map as Plotly figure JSON. Five thresholds in \u{00b0}C set the color scale from dark blue (t1) to dark red (t5); omitted thresholds use defaults -10, 0, 10, 20, 30. Set show_cities to overlay major cities.")]
    async fn get_heatmap(
        &self,
        Parameters(request): Parameters<GetHeatmapRequest>,
    ) -> Result<CallToolResult, McpError> {
        let scale = Self::color_scale(&request.thresholds)?;
        tracing::info!(
            "Building heat map for range {}..{} (cities: {})",
            scale.range[0],
            scale.range[1],
            request.show_cities
        );

        let snapshot = self.snapshot().await;
        let snapshot = match snapshot.ensure_data() {
            Ok(snapshot) => snapshot,
            Err(e) => return Ok(Self::no_data(e)),
        };

        let summary = format_summary(snapshot, &scale, request.show_cities);
        let figure = build_figure(snapshot, &scale, request.show_cities);
        let figure = serde_json::to_string(&figure).map_err(|e| {
            McpError::internal_error(format!("Failed to encode figure: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![
            Content::text(summary),
            Content::text(figure),
        ]))
    }

    /// Computes the color scale alone, without touching the network
    #[tool(description = "Get the normalized five-stop color scale for the given thresholds in \u{00b0}C. Thresholds may be given in any order; omitted ones use defaults -10, 0, 10, 20, 30.")]
    async fn get_color_scale(
        &self,
        Parameters(params): Parameters<ThresholdParams>,
    ) -> Result<CallToolResult, McpError> {
        let scale = Self::color_scale(&params)?;
        tracing::debug!("Color stops at {:?}", scale.positions());
        let body = serde_json::to_string_pretty(&scale).map_err(|e| {
            McpError::internal_error(format!("Failed to encode color scale: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(body)]))
    }

    /// Lists every state and city reading, hottest first
    #[tool(description = "Get the detailed temperature tables for all US states and major cities, hottest first.")]
    async fn get_temperature_table(&self) -> Result<CallToolResult, McpError> {
        let snapshot = self.snapshot().await;
        let snapshot = match snapshot.ensure_data() {
            Ok(snapshot) => snapshot,
            Err(e) => return Ok(Self::no_data(e)),
        };

        Ok(CallToolResult::success(vec![Content::text(format_tables(snapshot))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service(server: &MockServer) -> Heatmap {
        Heatmap::new(HeatmapConfig {
            api_base: server.uri(),
            request_timeout: Duration::from_millis(300),
            ..HeatmapConfig::default()
        })
        .unwrap()
    }

    async fn mount_temperature(server: &MockServer, temperature: f64, expected_calls: u64) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_weather": { "temperature": temperature }
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_snapshot_is_cached_between_calls() {
        let server = MockServer::start().await;
        // One fetch batch only: the second call must be served from the cache
        mount_temperature(&server, 14.0, 70).await;

        let heatmap = service(&server);
        let first = heatmap.snapshot().await;
        let second = heatmap.snapshot().await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.states.len(), 50);
        assert_eq!(first.cities.len(), 20);
        assert!(first.dropped.is_empty());
    }

    #[tokio::test]
    async fn test_expired_snapshot_is_refetched() {
        let server = MockServer::start().await;
        mount_temperature(&server, 14.0, 140).await;

        let heatmap = Heatmap::new(HeatmapConfig {
            api_base: server.uri(),
            snapshot_ttl: Duration::ZERO,
            ..HeatmapConfig::default()
        })
        .unwrap();
        let first = heatmap.snapshot().await;
        let second = heatmap.snapshot().await;

        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_heatmap_returns_summary_and_figure() {
        let server = MockServer::start().await;
        mount_temperature(&server, 14.0, 70).await;

        let result = service(&server)
            .get_heatmap(Parameters(GetHeatmapRequest {
                show_cities: true,
                ..Default::default()
            }))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 2);
    }

    #[tokio::test]
    async fn test_heatmap_without_data_is_an_error_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let heatmap = service(&server);
        let result = heatmap
            .get_heatmap(Parameters(GetHeatmapRequest::default()))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));

        let table = heatmap.get_temperature_table().await.unwrap();
        assert_eq!(table.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_out_of_range_threshold_is_rejected_before_fetching() {
        let server = MockServer::start().await;
        mount_temperature(&server, 14.0, 0).await;

        let request = GetHeatmapRequest {
            thresholds: ThresholdParams {
                t5: Some(80.0),
                ..Default::default()
            },
            show_cities: false,
        };
        assert!(service(&server).get_heatmap(Parameters(request)).await.is_err());
    }

    #[tokio::test]
    async fn test_color_scale_needs_no_network() {
        let server = MockServer::start().await;
        mount_temperature(&server, 14.0, 0).await;

        let params = ThresholdParams {
            t1: Some(-10.0),
            t2: Some(0.0),
            t3: Some(10.0),
            t4: Some(20.0),
            t5: Some(30.0),
        };
        let result = service(&server).get_color_scale(Parameters(params)).await.unwrap();
        assert_eq!(result.content.len(), 1);
    }
}
