//! Session context, the query pipeline, and the voice turn state machine.
//!
//! The pipeline is an explicit function from a transcript and a session
//! context to an outcome and an updated context. Every stage failure is
//! absorbed into a deterministic fallback value, so a turn always produces
//! a user-visible response.

use thiserror::Error;

use crate::compose::{self, error_message, incomplete_query_message};
use crate::directions::RouteSource;
use crate::domain::{GeoPoint, Language, Location, ParsedQuery, TransitResult};
use crate::genai::TextGenerator;
use crate::geocode::Locator;
use crate::interpret;
use crate::speech::{SpeechRecognizer, SpeechSynthesizer};

/// Everything a turn reads and writes.
///
/// No ambient mutable state: the pipeline takes a context and returns the
/// updated one.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// Active response language.
    pub language: Language,

    /// Last captured transcript.
    pub transcript: String,

    /// Last composed response.
    pub response: String,

    /// Results from the last completed query.
    pub results: Vec<TransitResult>,

    /// Device location, when known.
    pub location: Option<Location>,
}

impl SessionContext {
    /// Create a fresh context in the given language.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}

/// Where a session is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to start a turn.
    Idle,
    /// Capturing speech.
    Listening,
    /// Running the pipeline.
    Processing,
}

/// A turn was started while one is already in flight.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("session is busy ({state:?})")]
pub struct SessionBusy {
    pub state: SessionState,
}

/// What one pipeline run produced.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The extracted origin/destination pair.
    pub query: ParsedQuery,

    /// Resolved bus routes (empty on resolver failure or no match).
    pub results: Vec<TransitResult>,

    /// The composed spoken response.
    pub response: String,

    /// Synthesized audio, when the TTS service delivered any.
    pub audio: Option<Vec<u8>>,
}

/// The query pipeline: interpret, resolve, compose, synthesize.
pub struct Pipeline<G, R, S> {
    generator: G,
    routes: R,
    synthesizer: S,
}

impl<G, R, S> Pipeline<G, R, S>
where
    G: TextGenerator + Sync,
    R: RouteSource + Sync,
    S: SpeechSynthesizer + Sync,
{
    pub fn new(generator: G, routes: R, synthesizer: S) -> Self {
        Self {
            generator,
            routes,
            synthesizer,
        }
    }

    /// Run a transcript through the full pipeline, including synthesis.
    ///
    /// Stage failures never propagate: an unparseable query yields the
    /// "mention both locations" prompt, a resolver error yields an empty
    /// result list, composition falls back to its template, and a
    /// synthesis failure leaves `audio` unset.
    pub async fn process_query(
        &self,
        transcript: &str,
        context: SessionContext,
    ) -> (QueryOutcome, SessionContext) {
        let language = context.language;
        let (mut outcome, context) = self.respond(transcript, context).await;
        outcome.audio = self.speak(&outcome.response, language).await;
        (outcome, context)
    }

    /// Run the text stages only: interpret, resolve, compose.
    ///
    /// The returned context carries the transcript, results, and response
    /// of this turn; `audio` is always unset. The web query endpoint uses
    /// this directly since the browser requests audio separately.
    pub async fn respond(
        &self,
        transcript: &str,
        context: SessionContext,
    ) -> (QueryOutcome, SessionContext) {
        let language = context.language;

        let query = interpret::interpret(&self.generator, transcript, language).await;

        let (results, response) = if query.is_complete() {
            let results = match self.routes.bus_routes(&query.origin, &query.destination).await {
                Ok(results) => results,
                Err(e) => {
                    tracing::warn!(error = %e, "route resolution failed, treating as no routes");
                    Vec::new()
                }
            };
            let response = compose::compose(&self.generator, &results, language).await;
            (results, response)
        } else {
            (Vec::new(), incomplete_query_message(language).to_string())
        };

        let context = SessionContext {
            transcript: transcript.to_string(),
            response: response.clone(),
            results: results.clone(),
            ..context
        };

        (
            QueryOutcome {
                query,
                results,
                response,
                audio: None,
            },
            context,
        )
    }

    /// Synthesize text, absorbing failure into `None`.
    ///
    /// The browser falls back to its own synthesis when no audio comes back.
    pub async fn speak(&self, text: &str, language: Language) -> Option<Vec<u8>> {
        match self.synthesizer.synthesize(text, language).await {
            Ok(audio) => Some(audio),
            Err(e) => {
                tracing::warn!(error = %e, "speech synthesis failed, returning no audio");
                None
            }
        }
    }
}

/// The voice turn state machine around a pipeline.
///
/// Guards re-entry: a turn starts only from [`SessionState::Idle`], and both
/// success and failure funnel back to `Idle`.
pub struct VoiceSession<Rec, L, G, R, S> {
    recognizer: Rec,
    locator: L,
    pipeline: Pipeline<G, R, S>,
    context: SessionContext,
    state: SessionState,
    device_point: Option<GeoPoint>,
}

impl<Rec, L, G, R, S> VoiceSession<Rec, L, G, R, S>
where
    Rec: SpeechRecognizer + Sync,
    L: Locator + Sync,
    G: TextGenerator + Sync,
    R: RouteSource + Sync,
    S: SpeechSynthesizer + Sync,
{
    pub fn new(recognizer: Rec, locator: L, pipeline: Pipeline<G, R, S>, language: Language) -> Self {
        Self {
            recognizer,
            locator,
            pipeline,
            context: SessionContext::new(language),
            state: SessionState::Idle,
            device_point: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Record the device position and resolve its address.
    ///
    /// A geocode failure keeps the previous location.
    pub async fn set_device_point(&mut self, point: GeoPoint) {
        self.device_point = Some(point);
        self.refresh_location().await;
    }

    /// Switch the session language.
    ///
    /// Triggers one location refresh so the displayed address follows the
    /// new language; a geocode failure keeps the previous location.
    pub async fn set_language(&mut self, language: Language) {
        self.context.language = language;
        self.refresh_location().await;
    }

    async fn refresh_location(&mut self) {
        let Some(point) = self.device_point else {
            return;
        };

        match self.locator.locate(point).await {
            Ok(location) => self.context.location = Some(location),
            Err(e) => {
                tracing::warn!(error = %e, "location refresh failed, keeping previous address");
            }
        }
    }

    /// Run one full voice turn: capture, process, respond.
    ///
    /// Refused while a turn is already listening or processing. A capture
    /// failure sets the localized error message as the response; either way
    /// the session ends the turn idle.
    pub async fn run_turn(&mut self) -> Result<QueryOutcome, SessionBusy> {
        if self.state != SessionState::Idle {
            return Err(SessionBusy { state: self.state });
        }

        self.state = SessionState::Listening;
        let language = self.context.language;

        let transcript = match self.recognizer.capture(language.locale()).await {
            Ok(transcript) => transcript,
            Err(e) => {
                tracing::warn!(error = %e, "speech capture failed");
                let response = error_message(language).to_string();
                self.context.transcript.clear();
                self.context.results.clear();
                self.context.response = response.clone();
                self.state = SessionState::Idle;
                return Ok(QueryOutcome {
                    query: ParsedQuery::default(),
                    results: Vec::new(),
                    response,
                    audio: None,
                });
            }
        };

        self.state = SessionState::Processing;

        let context = std::mem::take(&mut self.context);
        let (outcome, context) = self.pipeline.process_query(&transcript, context).await;
        self.context = context;

        self.state = SessionState::Idle;
        Ok(outcome)
    }
}
