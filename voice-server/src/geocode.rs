//! Reverse geocoding.
//!
//! Resolves a coordinate pair to a human-readable address so the page can
//! show where the assistant thinks the user is. Only the first result's
//! formatted address is used.

use serde::Deserialize;

use crate::domain::{GeoPoint, Location};

/// Default base URL for the geocoding API.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Errors from the geocoding API.
#[derive(Debug)]
pub enum GeocodeError {
    /// Transport-level failure
    Http(reqwest::Error),
    /// Response body was not valid JSON
    Json { message: String, body: Option<String> },
    /// Non-success HTTP status
    HttpStatus { status: u16, message: String },
    /// The API returned a non-OK body status
    Status { code: String, message: String },
    /// The API returned no results for the coordinates
    NoResults,
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeocodeError::Http(e) => write!(f, "HTTP error: {}", e),
            GeocodeError::Json { message, body } => {
                write!(f, "Failed to parse geocoding response: {}", message)?;
                if let Some(body) = body {
                    write!(f, " (body: {})", body)?;
                }
                Ok(())
            }
            GeocodeError::HttpStatus { status, message } => {
                write!(f, "Geocoding API error (HTTP {}): {}", status, message)
            }
            GeocodeError::Status { code, message } => {
                write!(f, "Geocoding API status {}: {}", code, message)
            }
            GeocodeError::NoResults => write!(f, "No address found for these coordinates"),
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeocodeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        GeocodeError::Http(e)
    }
}

/// A resolver of coordinates to addresses.
///
/// The session layer depends on this seam so the language-change location
/// refresh can be tested without the hosted API.
pub trait Locator {
    /// Resolve a coordinate pair to a located address.
    fn locate(&self, point: GeoPoint) -> impl Future<Output = Result<Location, GeocodeError>> + Send;
}

impl<T: Locator + Sync> Locator for &T {
    async fn locate(&self, point: GeoPoint) -> Result<Location, GeocodeError> {
        (**self).locate(point).await
    }
}

/// Configuration for the reverse geocoder.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// API key passed as a query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

#[derive(Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}

/// Reverse geocoding client.
#[derive(Debug, Clone)]
pub struct ReverseGeocoder {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ReverseGeocoder {
    /// Create a new geocoder with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Resolve a coordinate pair to a located address.
    pub async fn reverse(&self, point: GeoPoint) -> Result<Location, GeocodeError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("latlng", point.to_string()), ("key", self.api_key.clone())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::HttpStatus {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let geocode: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        match geocode.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Err(GeocodeError::NoResults),
            code => {
                return Err(GeocodeError::Status {
                    code: code.to_string(),
                    message: geocode.error_message.unwrap_or_default(),
                });
            }
        }

        let address = geocode
            .results
            .into_iter()
            .next()
            .map(|r| r.formatted_address)
            .ok_or(GeocodeError::NoResults)?;

        Ok(Location { point, address })
    }
}

impl Locator for ReverseGeocoder {
    async fn locate(&self, point: GeoPoint) -> Result<Location, GeocodeError> {
        self.reverse(point).await
    }
}
