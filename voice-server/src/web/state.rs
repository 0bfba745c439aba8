//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedDirectionsClient;
use crate::directions::DirectionsClient;
use crate::genai::GenAiClient;
use crate::geocode::ReverseGeocoder;
use crate::speech::TtsClient;

/// Shared application state.
///
/// Contains all the clients needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Language model client for extraction and composition
    pub generator: Arc<GenAiClient>,

    /// Cached directions client
    pub routes: Arc<CachedDirectionsClient<DirectionsClient>>,

    /// Hosted TTS client
    pub synthesizer: Arc<TtsClient>,

    /// Reverse geocoding client
    pub geocoder: Arc<ReverseGeocoder>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        generator: GenAiClient,
        routes: CachedDirectionsClient<DirectionsClient>,
        synthesizer: TtsClient,
        geocoder: ReverseGeocoder,
    ) -> Self {
        Self {
            generator: Arc::new(generator),
            routes: Arc::new(routes),
            synthesizer: Arc::new(synthesizer),
            geocoder: Arc::new(geocoder),
        }
    }
}
