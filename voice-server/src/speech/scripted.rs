//! Scripted speech fakes for testing without a microphone or TTS service.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::Language;

use super::{SpeechError, SpeechRecognizer, SpeechSynthesizer};

/// Recognizer that replays a fixed script of transcripts.
///
/// Each call to `capture` pops the next entry; an exhausted script yields
/// [`SpeechError::NoInput`].
pub struct ScriptedRecognizer {
    script: Mutex<VecDeque<Result<String, SpeechError>>>,
    /// Locales requested so far, in order.
    locales: Mutex<Vec<String>>,
}

impl ScriptedRecognizer {
    /// Create a recognizer that yields the given transcripts in order.
    pub fn new(transcripts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            script: Mutex::new(
                transcripts
                    .into_iter()
                    .map(|t| Ok(t.into()))
                    .collect(),
            ),
            locales: Mutex::new(Vec::new()),
        }
    }

    /// Create a recognizer whose first capture fails.
    pub fn failing(error: SpeechError) -> Self {
        Self {
            script: Mutex::new(VecDeque::from([Err(error)])),
            locales: Mutex::new(Vec::new()),
        }
    }

    /// The locales passed to `capture` so far.
    pub fn requested_locales(&self) -> Vec<String> {
        self.locales.lock().unwrap().clone()
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    async fn capture(&self, locale: &str) -> Result<String, SpeechError> {
        self.locales.lock().unwrap().push(locale.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SpeechError::NoInput))
    }
}

/// Synthesizer that records every request and returns canned bytes.
#[derive(Default)]
pub struct RecordingSynthesizer {
    spoken: Mutex<Vec<(String, Language)>>,
    /// When set, every synthesis call fails with an API error.
    fail: bool,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a synthesizer whose calls always fail.
    pub fn failing() -> Self {
        Self {
            spoken: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// The (text, language) pairs synthesized so far.
    pub fn spoken(&self) -> Vec<(String, Language)> {
        self.spoken.lock().unwrap().clone()
    }
}

impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(&self, text: &str, language: Language) -> Result<Vec<u8>, SpeechError> {
        self.spoken
            .lock()
            .unwrap()
            .push((text.to_string(), language));

        if self.fail {
            return Err(SpeechError::ApiError {
                status: 503,
                message: "synthesis unavailable".into(),
            });
        }

        Ok(b"RIFF-fake-audio".to_vec())
    }
}
