//! Generative-language client error types.

use std::fmt;

/// Errors from the generative-language HTTP client.
#[derive(Debug)]
pub enum GenAiError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// Response body could not be parsed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl fmt::Display for GenAiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenAiError::Http(e) => write!(f, "HTTP error: {e}"),
            GenAiError::Json { message, body } => {
                write!(f, "response parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            GenAiError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            GenAiError::RateLimited => write!(f, "rate limited by generation API"),
            GenAiError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for GenAiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenAiError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GenAiError {
    fn from(err: reqwest::Error) -> Self {
        GenAiError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GenAiError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by generation API");

        let err = GenAiError::ApiError {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");

        let err = GenAiError::Json {
            message: "expected value".into(),
            body: Some("not json".into()),
        };
        assert!(err.to_string().contains("response parse error"));
        assert!(err.to_string().contains("not json"));
    }
}
