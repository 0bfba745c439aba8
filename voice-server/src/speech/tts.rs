//! Hosted text-to-speech client.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::domain::Language;

use super::{SpeechError, SpeechSynthesizer};

/// Default base URL for the hosted speech service.
const DEFAULT_BASE_URL: &str = "https://dwani-dwani-api.hf.space";

/// Configuration for the TTS client.
#[derive(Debug, Clone)]
pub struct TtsConfig {
    /// API key sent as a bearer token
    pub api_key: String,
    /// Base URL for the service (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TtsConfig {
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

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
    language: &'a str,
    voice: String,
}

/// Client for the hosted TTS endpoint.
#[derive(Debug, Clone)]
pub struct TtsClient {
    http: reqwest::Client,
    base_url: String,
}

impl TtsClient {
    /// Create a new TTS client with the given configuration.
    pub fn new(config: TtsConfig) -> Result<Self, SpeechError> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| SpeechError::Unauthorized)?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// The voice identifier for a language.
    ///
    /// The service exposes one female voice per supported language, named
    /// by the lowercased English language name (e.g. `hindi_female`).
    fn voice(language: Language) -> String {
        format!("{}_female", language.english_name().to_lowercase())
    }
}

impl SpeechSynthesizer for TtsClient {
    /// Synthesize text via `POST {base}/tts`, returning the raw audio bytes.
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, SpeechError> {
        let request = SynthesizeRequest {
            text,
            language: language.tag(),
            voice: Self::voice(language),
        };

        let response = self
            .http
            .post(format!("{}/tts", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SpeechError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = TtsConfig::new("test-key")
            .with_base_url("http://localhost:9090")
            .with_timeout(5);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:9090");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = TtsConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn voice_uses_full_language_name() {
        assert_eq!(TtsClient::voice(Language::Hindi), "hindi_female");
        assert_eq!(TtsClient::voice(Language::English), "english_female");
        assert_eq!(TtsClient::voice(Language::Kannada), "kannada_female");
        assert_eq!(TtsClient::voice(Language::Malayalam), "malayalam_female");
    }

    #[test]
    fn client_creation() {
        assert!(TtsClient::new(TtsConfig::new("test-key")).is_ok());
    }
}
