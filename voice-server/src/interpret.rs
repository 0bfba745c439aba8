//! Query interpretation.
//!
//! Turns a raw transcript into a [`ParsedQuery`]. The primary path asks the
//! hosted language model for a JSON extraction; any failure falls back to a
//! fixed, ordered table of regex patterns over the six supported locales'
//! "from"/"to" separator words. The network call is never retried.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Language, ParsedQuery};
use crate::genai::{TextGenerator, generate_json};

/// Fallback patterns, tried in priority order. First match wins; capture
/// groups 1 and 2 become origin and destination.
///
/// Patterns are matched case-insensitively against the raw transcript so
/// captured place names keep their spoken casing.
static FALLBACK_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        // Explicit marker form: "from X to Y" (and the Devanagari equivalents)
        Regex::new(r"(?i)(?:from|से)\s+(.+?)\s+(?:to|तक)\s+(.+)").unwrap(),
        // Postposition form: "X se Y tak", covering the separator words of
        // all six locales in transliterated and native script
        Regex::new(
            r"(?i)(.+?)\s+(?:se|से|inda|ಇಂದ|nundi|నుండి|irundhu|இருந்து|ninnu|നിന്ന്)\s+(.+?)\s+(?:tak|तक|varege|ವರೆಗೆ|varaku|వరకు|varai|வரை|vare|വരെ)",
        )
        .unwrap(),
        // Bare separator: "X to Y"
        Regex::new(r"(?i)(.+?)\s+(?:to|tak|तक|ge|ಗೆ|varaku|varai|vare)\s+(.+)").unwrap(),
    ]
});

/// Interpret a transcript into an origin/destination pair.
///
/// Model failures (transport, status, malformed JSON) all route to the
/// pattern fallback; a query neither path can parse yields an incomplete
/// `ParsedQuery` with both fields empty.
pub async fn interpret<G: TextGenerator>(
    generator: &G,
    query: &str,
    language: Language,
) -> ParsedQuery {
    match generate_json::<G, ParsedQuery>(generator, &extraction_prompt(query, language)).await {
        // Re-normalize: the model is not trusted to trim
        Ok(parsed) => ParsedQuery::new(parsed.origin, parsed.destination),
        Err(e) => {
            tracing::warn!(error = %e, "query extraction failed, using pattern fallback");
            fallback_parse(query)
        }
    }
}

/// Parse a transcript with the fixed pattern table only.
///
/// Pure function of its input; exposed separately so the fallback behavior
/// is directly testable.
pub fn fallback_parse(query: &str) -> ParsedQuery {
    for pattern in FALLBACK_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(query) {
            return ParsedQuery::new(&captures[1], &captures[2]);
        }
    }

    ParsedQuery::default()
}

/// Build the extraction prompt for the language model.
fn extraction_prompt(query: &str, language: Language) -> String {
    format!(
        "Extract the starting location and destination from this transit query. \
         The query may be in {lang} or mix {lang} with English. \
         Respond with only a JSON object of the exact shape \
         {{\"origin\": \"...\", \"destination\": \"...\"}} and no other text. \
         Use empty strings for anything you cannot determine.\n\nQuery: {query}",
        lang = language.english_name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genai::GenAiError;

    struct FixedGenerator(&'static str);

    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingGenerator;

    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenAiError> {
            Err(GenAiError::ApiError {
                status: 500,
                message: "boom".into(),
            })
        }
    }

    #[test]
    fn bare_to_separator() {
        let parsed = fallback_parse("Majestic to KR Market");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "KR Market");
    }

    #[test]
    fn explicit_from_to() {
        let parsed = fallback_parse("which bus goes from Majestic to KR Market");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "KR Market");
    }

    #[test]
    fn hindi_postposition_transliterated() {
        // Matches the second pattern: "X se Y tak"
        let parsed = fallback_parse("Majestic se KR Market tak");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "KR Market");
    }

    #[test]
    fn hindi_postposition_native_script() {
        let parsed = fallback_parse("मैजेस्टिक से केआर मार्केट तक");
        assert_eq!(parsed.origin, "मैजेस्टिक");
        assert_eq!(parsed.destination, "केआर मार्केट");
    }

    #[test]
    fn kannada_postposition() {
        let parsed = fallback_parse("Majestic inda Shivajinagar varege");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "Shivajinagar");
    }

    #[test]
    fn tamil_postposition() {
        let parsed = fallback_parse("Majestic irundhu Silk Board varai");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "Silk Board");
    }

    #[test]
    fn telugu_postposition() {
        let parsed = fallback_parse("Majestic nundi Whitefield varaku");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "Whitefield");
    }

    #[test]
    fn malayalam_postposition() {
        let parsed = fallback_parse("Majestic ninnu Hebbal vare");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "Hebbal");
    }

    #[test]
    fn no_separator_yields_empty() {
        let parsed = fallback_parse("majestic kr market");
        assert_eq!(parsed, ParsedQuery::default());
        assert!(!parsed.is_complete());
    }

    #[test]
    fn separator_inside_word_does_not_match() {
        // "to" inside "auto" is not a standalone separator
        let parsed = fallback_parse("autorickshaw");
        assert!(!parsed.is_complete());
    }

    #[test]
    fn captures_are_trimmed() {
        let parsed = fallback_parse("  Majestic   to   KR Market  ");
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "KR Market");
    }

    #[tokio::test]
    async fn model_extraction_wins_when_available() {
        let generator = FixedGenerator(r#"{"origin": "Hebbal", "destination": "Airport"}"#);

        let parsed = interpret(&generator, "anything at all", Language::English).await;
        assert_eq!(parsed.origin, "Hebbal");
        assert_eq!(parsed.destination, "Airport");
    }

    #[tokio::test]
    async fn model_output_is_trimmed() {
        let generator = FixedGenerator(r#"{"origin": " Hebbal ", "destination": "Airport "}"#);

        let parsed = interpret(&generator, "anything", Language::English).await;
        assert_eq!(parsed.origin, "Hebbal");
        assert_eq!(parsed.destination, "Airport");
    }

    #[tokio::test]
    async fn model_failure_falls_back_to_patterns() {
        let parsed = interpret(&FailingGenerator, "Majestic se KR Market tak", Language::Hindi)
            .await;
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "KR Market");
    }

    #[tokio::test]
    async fn malformed_model_output_falls_back_to_patterns() {
        let generator = FixedGenerator("I think you want to go to the market.");

        let parsed = interpret(&generator, "Majestic to KR Market", Language::English).await;
        assert_eq!(parsed.origin, "Majestic");
        assert_eq!(parsed.destination, "KR Market");
    }

    #[test]
    fn prompt_names_the_language() {
        let prompt = extraction_prompt("x", Language::Kannada);
        assert!(prompt.contains("Kannada"));
        assert!(prompt.contains("origin"));
    }
}
