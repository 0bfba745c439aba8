use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use voice_server::cache::{CacheConfig, CachedDirectionsClient};
use voice_server::directions::{DirectionsClient, DirectionsConfig};
use voice_server::genai::{GenAiClient, GenAiConfig};
use voice_server::geocode::{GeocodeConfig, ReverseGeocoder};
use voice_server::speech::{TtsClient, TtsConfig};
use voice_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Get credentials from environment
    let maps_key = std::env::var("MAPS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: MAPS_API_KEY not set. Directions and geocoding calls will fail.");
        String::new()
    });
    let genai_key = std::env::var("GENAI_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: GENAI_API_KEY not set. Queries will use the pattern fallback.");
        String::new()
    });
    let tts_key = std::env::var("TTS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: TTS_API_KEY not set. The browser will synthesize speech itself.");
        String::new()
    });

    // Create the language model client
    let mut genai_config = GenAiConfig::new(&genai_key);
    if let Ok(base) = std::env::var("GENAI_BASE_URL") {
        genai_config = genai_config.with_base_url(base);
    }
    let generator = GenAiClient::new(genai_config).expect("Failed to create GenAI client");

    // Create the cached directions client
    let directions =
        DirectionsClient::new(DirectionsConfig::new(&maps_key)).expect("Failed to create directions client");
    let routes = CachedDirectionsClient::new(directions, &CacheConfig::default());

    // Create the TTS client
    let mut tts_config = TtsConfig::new(&tts_key);
    if let Ok(base) = std::env::var("TTS_BASE_URL") {
        tts_config = tts_config.with_base_url(base);
    }
    let synthesizer = TtsClient::new(tts_config).expect("Failed to create TTS client");

    // Create the reverse geocoder
    let geocoder =
        ReverseGeocoder::new(GeocodeConfig::new(&maps_key)).expect("Failed to create geocoder");

    // Build app state
    let state = AppState::new(generator, routes, synthesizer, geocoder);

    // Create router
    let app = create_router(state, "static");

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Bus Voice Assistant listening on http://{addr}");
    println!();
    println!("Open http://{addr} in your browser for the web interface.");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health      - Health check");
    println!("  POST /api/query   - Run a transit query");
    println!("  POST /api/speak   - Synthesize a spoken reply");
    println!("  GET  /api/locate  - Reverse geocode coordinates");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
