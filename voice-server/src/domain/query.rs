//! Parsed transit queries.

use serde::{Deserialize, Serialize};

/// The origin/destination pair extracted from a spoken query.
///
/// Both fields default to empty; an empty field signals that the query
/// could not be resolved. The pipeline only calls the route resolver when
/// [`ParsedQuery::is_complete`] holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedQuery {
    pub origin: String,
    pub destination: String,
}

impl ParsedQuery {
    /// Create a parsed query, trimming surrounding whitespace.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into().trim().to_string(),
            destination: destination.into().trim().to_string(),
        }
    }

    /// Whether both origin and destination were resolved.
    pub fn is_complete(&self) -> bool {
        !self.origin.is_empty() && !self.destination.is_empty()
    }
}
