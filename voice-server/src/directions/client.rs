//! Directions HTTP client.
//!
//! Queries the hosted directions API for transit routes restricted to
//! buses, with metric units and a fixed regional bias. One request per
//! lookup; no pagination, no alternative routes.

use chrono::{DateTime, Utc};

use crate::domain::TransitResult;

use super::convert::bus_results;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Default base URL for the directions API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Default region bias.
const DEFAULT_REGION: &str = "in";

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key passed as a query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Region bias for geocoding the origin/destination strings
    pub region: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the region bias.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Directions API client.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    region: String,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            region: config.region,
        })
    }

    /// Fetch the raw directions response for a bus-transit query.
    ///
    /// `ZERO_RESULTS` is a successful response (the caller sees an empty
    /// route list); every other non-OK body status is an error.
    pub async fn route_response(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<Utc>,
    ) -> Result<DirectionsResponse, DirectionsError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", "transit"),
                ("transit_mode", "bus"),
                ("units", "metric"),
                ("region", &self.region),
                ("departure_time", &departure.timestamp().to_string()),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let directions: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        match directions.status.as_str() {
            "OK" | "ZERO_RESULTS" => Ok(directions),
            "REQUEST_DENIED" => Err(DirectionsError::Denied),
            "OVER_QUERY_LIMIT" => Err(DirectionsError::RateLimited),
            code => Err(DirectionsError::Status {
                code: code.to_string(),
                message: directions.error_message.unwrap_or_default(),
            }),
        }
    }

    /// Fetch bus transit results for an origin/destination pair.
    pub async fn bus_routes(
        &self,
        origin: &str,
        destination: &str,
        departure: DateTime<Utc>,
    ) -> Result<Vec<TransitResult>, DirectionsError> {
        let response = self.route_response(origin, destination, departure).await?;
        Ok(bus_results(&response, origin, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080/directions")
            .with_region("uk")
            .with_timeout(5);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080/directions");
        assert_eq!(config.region, "uk");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.region, DEFAULT_REGION);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let client = DirectionsClient::new(DirectionsConfig::new("test-key"));
        assert!(client.is_ok());
    }
}
