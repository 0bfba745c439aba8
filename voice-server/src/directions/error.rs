//! Directions client error types.

use std::fmt;

/// Errors from the directions HTTP client.
///
/// The pipeline absorbs all of these into an empty result list; they are
/// typed so tests and logs can tell the failure modes apart.
#[derive(Debug)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// Transport-level error status code
    HttpStatus { status: u16, message: String },

    /// API body carried a non-OK status code
    Status { code: String, message: String },

    /// Request denied (invalid or missing API key)
    Denied,

    /// Over the API query limit
    RateLimited,
}

impl fmt::Display for DirectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionsError::Http(e) => write!(f, "HTTP error: {e}"),
            DirectionsError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            DirectionsError::HttpStatus { status, message } => {
                write!(f, "HTTP error {status}: {message}")
            }
            DirectionsError::Status { code, message } => {
                write!(f, "directions status {code}: {message}")
            }
            DirectionsError::Denied => write!(f, "request denied (invalid API key)"),
            DirectionsError::RateLimited => write!(f, "over query limit for directions API"),
        }
    }
}

impl std::error::Error for DirectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectionsError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err)
    }
}
