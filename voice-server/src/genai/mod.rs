//! Hosted generative-language client.
//!
//! The assistant calls the same hosted text-generation endpoint for two
//! different jobs: extracting `{origin, destination}` from a transcript and
//! composing the spoken answer. Both are expressed through one generic
//! capability: a [`TextGenerator`] produces raw text for a prompt, and
//! [`generate_json`] layers a typed JSON contract on top. Each caller
//! supplies its own fallback strategy; nothing here retries.

mod client;
mod error;

pub use client::{GenAiClient, GenAiConfig};
pub use error::GenAiError;

use serde::de::DeserializeOwned;

/// A source of generated text.
///
/// Implemented by the HTTP client and by deterministic fakes in tests.
pub trait TextGenerator {
    /// Generate text for a prompt. One shot, no retry.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenAiError>> + Send;
}

impl<T: TextGenerator + Sync> TextGenerator for &T {
    async fn generate(&self, prompt: &str) -> Result<String, GenAiError> {
        (**self).generate(prompt).await
    }
}

/// Generate text and parse it as a JSON value of type `T`.
///
/// Models frequently wrap JSON output in markdown code fences; those are
/// stripped before parsing. A parse failure is reported as a `Json` error
/// carrying a snippet of the raw response.
pub async fn generate_json<G, T>(generator: &G, prompt: &str) -> Result<T, GenAiError>
where
    G: TextGenerator,
    T: DeserializeOwned,
{
    let text = generator.generate(prompt).await?;
    let payload = strip_code_fences(&text);

    serde_json::from_str(payload).map_err(|e| GenAiError::Json {
        message: e.to_string(),
        body: Some(text.chars().take(500).collect()),
    })
}

/// Strip a surrounding markdown code fence, if present.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string ("json") on the opening fence line
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };

    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParsedQuery;

    struct FixedGenerator(String);

    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Err(GenAiError::ApiError {
                status: 503,
                message: "unavailable".into(),
            })
        }
    }

    #[test]
    fn strip_plain_text() {
        assert_eq!(strip_code_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn strip_fenced_json() {
        let fenced = "```json\n{\"origin\": \"A\"}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"origin\": \"A\"}");

        let bare_fence = "```\n{\"origin\": \"A\"}\n```";
        assert_eq!(strip_code_fences(bare_fence), "{\"origin\": \"A\"}");
    }

    #[tokio::test]
    async fn generate_json_parses_response() {
        let generator =
            FixedGenerator(r#"{"origin": "Majestic", "destination": "KR Market"}"#.into());

        let parsed: ParsedQuery = generate_json(&generator, "extract").await.unwrap();
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "KR Market");
    }

    #[tokio::test]
    async fn generate_json_parses_fenced_response() {
        let generator = FixedGenerator(
            "```json\n{\"origin\": \"Majestic\", \"destination\": \"KR Market\"}\n```".into(),
        );

        let parsed: ParsedQuery = generate_json(&generator, "extract").await.unwrap();
        assert!(parsed.is_complete());
    }

    #[tokio::test]
    async fn generate_json_reports_malformed_body() {
        let generator = FixedGenerator("the bus leaves at ten".into());

        let result: Result<ParsedQuery, _> = generate_json(&generator, "extract").await;
        match result {
            Err(GenAiError::Json { body, .. }) => {
                assert!(body.unwrap().contains("the bus leaves"));
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_json_propagates_api_errors() {
        let result: Result<ParsedQuery, _> = generate_json(&FailingGenerator, "extract").await;
        assert!(matches!(result, Err(GenAiError::ApiError { status: 503, .. })));
    }
}
