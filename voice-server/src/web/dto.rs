//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::TransitResult;

/// Request to run a transit query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The spoken query as transcribed by the browser
    pub transcript: String,

    /// Language tag or locale (e.g., "kn" or "kn-IN"); defaults to English
    pub language: Option<String>,
}

/// Response for a transit query.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// The transcript that was processed
    pub transcript: String,

    /// The language the response is in
    pub language: String,

    /// Extracted origin (empty if not determined)
    pub origin: String,

    /// Extracted destination (empty if not determined)
    pub destination: String,

    /// The composed spoken response
    pub response: String,

    /// Resolved bus routes
    pub results: Vec<TransitResult>,
}

/// Request to synthesize speech.
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    /// Text to speak
    pub text: String,

    /// Language tag or locale; defaults to English
    pub language: Option<String>,
}

/// Query parameters for reverse geocoding.
#[derive(Debug, Deserialize)]
pub struct LocateParams {
    pub lat: f64,
    pub lng: f64,
}

/// Response for reverse geocoding.
#[derive(Debug, Serialize)]
pub struct LocateResponse {
    /// Human-readable address of the coordinates
    pub address: String,

    pub lat: f64,
    pub lng: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
