//! Speech input and output seams.
//!
//! The pipeline never talks to an audio device or a synthesis service
//! directly; it goes through [`SpeechRecognizer`] and [`SpeechSynthesizer`].
//! In the browser deployment recognition happens client-side and arrives as
//! a transcript over HTTP, the hosted TTS client implements synthesis, and
//! the scripted fakes drive tests.

mod scripted;
mod tts;

pub use scripted::{RecordingSynthesizer, ScriptedRecognizer};
pub use tts::{TtsClient, TtsConfig};

use crate::domain::Language;

/// Errors from speech capture or synthesis.
#[derive(Debug)]
pub enum SpeechError {
    /// Transport-level failure talking to the speech service
    Http(reqwest::Error),
    /// The service rejected the request
    ApiError { status: u16, message: String },
    /// Rate limited by the speech service
    RateLimited,
    /// Invalid or missing API key
    Unauthorized,
    /// Nothing was captured or no more scripted input remains
    NoInput,
}

impl std::fmt::Display for SpeechError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpeechError::Http(e) => write!(f, "HTTP error: {}", e),
            SpeechError::ApiError { status, message } => {
                write!(f, "Speech API error (HTTP {}): {}", status, message)
            }
            SpeechError::RateLimited => write!(f, "Rate limited by speech API"),
            SpeechError::Unauthorized => write!(f, "Invalid or missing speech API key"),
            SpeechError::NoInput => write!(f, "No speech input available"),
        }
    }
}

impl std::error::Error for SpeechError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SpeechError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SpeechError {
    fn from(e: reqwest::Error) -> Self {
        SpeechError::Http(e)
    }
}

/// A source of spoken transcripts.
pub trait SpeechRecognizer {
    /// Capture one utterance in the given locale (e.g. `"kn-IN"`) and
    /// return its transcript.
    fn capture(&self, locale: &str) -> impl Future<Output = Result<String, SpeechError>> + Send;
}

impl<T: SpeechRecognizer + Sync> SpeechRecognizer for &T {
    async fn capture(&self, locale: &str) -> Result<String, SpeechError> {
        (**self).capture(locale).await
    }
}

/// A renderer of text to audio.
pub trait SpeechSynthesizer {
    /// Synthesize the text in the given language, returning encoded audio.
    fn synthesize(
        &self,
        text: &str,
        language: Language,
    ) -> impl Future<Output = Result<Vec<u8>, SpeechError>> + Send;
}

impl<T: SpeechSynthesizer + Sync> SpeechSynthesizer for &T {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, SpeechError> {
        (**self).synthesize(text, language).await
    }
}
