//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::directions::DirectionsError;
use crate::domain::{GeoPoint, Language};
use crate::geocode::GeocodeError;
use crate::session::{Pipeline, SessionContext};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/query", post(run_query))
        .route("/api/speak", post(speak))
        .route("/api/locate", get(locate))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the language toggle and mic button.
async fn index_page() -> impl IntoResponse {
    IndexTemplate::new()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Run a transcript through the query pipeline.
///
/// Returns an HTML results fragment or JSON depending on the Accept header.
async fn run_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: QueryRequest = serde_json::from_slice(&body).map_err(|e| {
        eprintln!("[JSON parse error] {e}");
        eprintln!("[Body] {}", String::from_utf8_lossy(&body));
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    if req.transcript.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Empty transcript".to_string(),
        });
    }

    let language = Language::parse_or_default(req.language.as_deref().unwrap_or_default());

    let pipeline = Pipeline::new(
        state.generator.as_ref(),
        state.routes.as_ref(),
        state.synthesizer.as_ref(),
    );

    let (outcome, context) = pipeline
        .respond(&req.transcript, SessionContext::new(language))
        .await;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = ResultsTemplate {
            response: outcome.response,
            results: outcome.results.iter().map(ResultView::from_result).collect(),
        };

        Ok(template.into_response())
    } else {
        Ok(Json(QueryResponse {
            transcript: context.transcript,
            language: language.tag().to_string(),
            origin: outcome.query.origin,
            destination: outcome.query.destination,
            response: outcome.response,
            results: outcome.results,
        })
        .into_response())
    }
}

/// Synthesize speech for a response.
///
/// Returns the audio bytes, or `204 No Content` when the TTS service is
/// unavailable so the browser can fall back to its own synthesis.
async fn speak(
    State(state): State<AppState>,
    Json(req): Json<SpeakRequest>,
) -> Result<Response, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "Empty text".to_string(),
        });
    }

    let language = Language::parse_or_default(req.language.as_deref().unwrap_or_default());

    let pipeline = Pipeline::new(
        state.generator.as_ref(),
        state.routes.as_ref(),
        state.synthesizer.as_ref(),
    );

    match pipeline.speak(&req.text, language).await {
        Some(audio) => Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "audio/mpeg")],
            audio,
        )
            .into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Reverse geocode device coordinates to an address.
async fn locate(
    State(state): State<AppState>,
    Query(params): Query<LocateParams>,
) -> Result<Json<LocateResponse>, AppError> {
    let point = GeoPoint::new(params.lat, params.lng).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let location = state.geocoder.reverse(point).await.map_err(AppError::from)?;

    Ok(Json(LocateResponse {
        address: location.address,
        lat: point.lat(),
        lng: point.lng(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<DirectionsError> for AppError {
    fn from(e: DirectionsError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<GeocodeError> for AppError {
    fn from(e: GeocodeError) -> Self {
        match e {
            GeocodeError::NoResults => AppError::NotFound {
                message: "No address found for these coordinates".to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
