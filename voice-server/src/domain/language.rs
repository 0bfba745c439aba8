//! Supported query languages.

use std::fmt;

/// Error returned when parsing an unsupported language tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language tag: {tag}")]
pub struct InvalidLanguage {
    tag: String,
}

/// A supported assistant language.
///
/// The assistant speaks six languages. Every language has a short BCP 47
/// primary subtag (used in API payloads) and a full speech locale tag
/// (used to configure recognition and synthesis).
///
/// # Examples
///
/// ```
/// use voice_server::domain::Language;
///
/// let hi = Language::parse("hi").unwrap();
/// assert_eq!(hi, Language::Hindi);
/// assert_eq!(hi.locale(), "hi-IN");
///
/// // Full locale tags are accepted; the region part is ignored
/// assert_eq!(Language::parse("kn-IN").unwrap(), Language::Kannada);
///
/// // Unknown tags are rejected
/// assert!(Language::parse("fr").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Hindi,
    Kannada,
    Tamil,
    Telugu,
    Malayalam,
}

/// All supported languages, in display order.
pub const ALL_LANGUAGES: [Language; 6] = [
    Language::English,
    Language::Hindi,
    Language::Kannada,
    Language::Tamil,
    Language::Telugu,
    Language::Malayalam,
];

impl Language {
    /// Parse a language from a tag.
    ///
    /// Accepts the short tag (`"hi"`) or a full locale tag (`"hi-IN"`),
    /// case-insensitively. The region subtag is ignored.
    pub fn parse(tag: &str) -> Result<Self, InvalidLanguage> {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);

        match primary.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "hi" => Ok(Language::Hindi),
            "kn" => Ok(Language::Kannada),
            "ta" => Ok(Language::Tamil),
            "te" => Ok(Language::Telugu),
            "ml" => Ok(Language::Malayalam),
            _ => Err(InvalidLanguage {
                tag: tag.to_string(),
            }),
        }
    }

    /// Parse a tag, falling back to English for anything unrecognized.
    ///
    /// Message lookups must always produce a string, so an unknown tag
    /// selects the English entry rather than failing.
    pub fn parse_or_default(tag: &str) -> Self {
        Self::parse(tag).unwrap_or(Language::English)
    }

    /// The short BCP 47 primary subtag.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Kannada => "kn",
            Language::Tamil => "ta",
            Language::Telugu => "te",
            Language::Malayalam => "ml",
        }
    }

    /// The speech locale tag for recognition and synthesis.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Hindi => "hi-IN",
            Language::Kannada => "kn-IN",
            Language::Tamil => "ta-IN",
            Language::Telugu => "te-IN",
            Language::Malayalam => "ml-IN",
        }
    }

    /// The English name of the language (used in generation prompts).
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Kannada => "Kannada",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::Malayalam => "Malayalam",
        }
    }

    /// The language's own name for it (used in the language toggle).
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Kannada => "ಕನ್ನಡ",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
            Language::Malayalam => "മലയാളം",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}
