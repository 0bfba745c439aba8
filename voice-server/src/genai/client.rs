//! Generative-language HTTP client.
//!
//! Thin wrapper around the hosted text-generation endpoint. The endpoint
//! takes a plain prompt and returns generated text; the typed JSON layer
//! lives in the module root (`generate_json`).

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use super::TextGenerator;
use super::error::GenAiError;

/// Default base URL for the hosted generation API.
const DEFAULT_BASE_URL: &str = "https://dwani-dwani-api.hf.space";

/// Configuration for the generation client.
#[derive(Debug, Clone)]
pub struct GenAiConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GenAiConfig {
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

/// Request body for the generation endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

/// Response body from the generation endpoint.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

/// Generative-language API client.
#[derive(Debug, Clone)]
pub struct GenAiClient {
    http: reqwest::Client,
    base_url: String,
}

impl GenAiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        let mut headers = HeaderMap::new();

        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key)).map_err(
            |_| GenAiError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            },
        )?;
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

impl TextGenerator for GenAiClient {
    /// Send a prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        let url = format!("{}/generate", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&GenerateRequest { prompt })
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GenAiError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GenAiError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let generated: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| GenAiError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(generated.text)
    }
}
