//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{ALL_LANGUAGES, Language, TransitResult};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the language toggle and mic button.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub languages: Vec<LanguageView>,
}

impl IndexTemplate {
    pub fn new() -> Self {
        Self {
            languages: ALL_LANGUAGES.iter().map(LanguageView::from_language).collect(),
        }
    }
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Query results fragment.
#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
    pub response: String,
    pub results: Vec<ResultView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Language option for the toggle.
#[derive(Debug, Clone)]
pub struct LanguageView {
    pub tag: String,
    pub locale: String,
    pub native_name: String,
}

impl LanguageView {
    pub fn from_language(language: &Language) -> Self {
        Self {
            tag: language.tag().to_string(),
            locale: language.locale().to_string(),
            native_name: language.native_name().to_string(),
        }
    }
}

/// Transit result view model for templates.
#[derive(Debug, Clone)]
pub struct ResultView {
    pub bus_number: String,
    pub from: String,
    pub to: String,
    pub departure_time: String,
    pub duration: String,
    pub stops: u32,
}

impl ResultView {
    pub fn from_result(result: &TransitResult) -> Self {
        Self {
            bus_number: result.bus_number.clone(),
            from: result.from.clone(),
            to: result.to.clone(),
            departure_time: result.departure_time.clone(),
            duration: result.duration.clone(),
            stops: result.stops,
        }
    }
}
