//! Mock directions client for testing without API access.
//!
//! Loads sample directions responses from JSON files and serves them as if
//! they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::TransitResult;

use super::RouteSource;
use super::convert::bus_results;
use super::error::DirectionsError;
use super::types::DirectionsResponse;

/// Mock directions client that serves data from JSON files.
///
/// Useful for development and testing without real directions API
/// credentials. Expects files named `{origin}__{destination}.json` where
/// both parts are [`slug`]s of the query strings (e.g.,
/// `majestic__kr-market.json`).
#[derive(Clone)]
pub struct MockDirectionsClient {
    /// Pre-loaded responses, keyed by "{origin_slug}__{destination_slug}".
    responses: Arc<HashMap<String, DirectionsResponse>>,
}

impl MockDirectionsClient {
    /// Create a new mock client by loading JSON files from a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DirectionsError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| DirectionsError::Status {
            code: "MOCK".into(),
            message: format!("Failed to read mock data directory: {}", e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DirectionsError::Status {
                code: "MOCK".into(),
                message: format!("Failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| DirectionsError::Status {
                    code: "MOCK".into(),
                    message: format!("Invalid filename: {:?}", path),
                })?
                .to_string();

            let json = std::fs::read_to_string(&path).map_err(|e| DirectionsError::Status {
                code: "MOCK".into(),
                message: format!("Failed to read {:?}: {}", path, e),
            })?;

            let response: DirectionsResponse =
                serde_json::from_str(&json).map_err(|e| DirectionsError::Json {
                    message: format!("Failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            responses.insert(key, response);
        }

        if responses.is_empty() {
            return Err(DirectionsError::Status {
                code: "MOCK".into(),
                message: format!("No mock response files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// The fixture key for an origin/destination pair.
    pub fn key(origin: &str, destination: &str) -> String {
        format!("{}__{}", slug(origin), slug(destination))
    }

    /// List the loaded fixture keys.
    pub fn available(&self) -> Vec<&str> {
        self.responses.keys().map(String::as_str).collect()
    }
}

impl RouteSource for MockDirectionsClient {
    /// Serve bus results for a pair from the loaded fixtures.
    ///
    /// Mimics the real `DirectionsClient::bus_routes` interface; the
    /// departure time is ignored since mock data is static.
    async fn bus_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<TransitResult>, DirectionsError> {
        let key = Self::key(origin, destination);

        let response = self
            .responses
            .get(&key)
            .ok_or_else(|| DirectionsError::Status {
                code: "MOCK".into(),
                message: format!(
                    "No mock data for {}. Available: {:?}",
                    key,
                    self.available()
                ),
            })?;

        Ok(bus_results(response, origin, destination))
    }
}

/// Normalize a query string into a fixture-name slug.
///
/// Lowercases, maps runs of non-alphanumeric characters to single hyphens,
/// and strips leading/trailing hyphens.
pub fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_hyphen = true;

    for c in s.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "status": "OK",
        "routes": [{
            "legs": [{
                "duration": {"text": "14 mins"},
                "steps": [{
                    "travel_mode": "TRANSIT",
                    "transit_details": {
                        "line": {"short_name": "228C", "vehicle": {"type": "BUS"}},
                        "departure_stop": {"name": "Majestic"},
                        "arrival_stop": {"name": "KR Market"},
                        "departure_time": {"text": "5 mins"},
                        "num_stops": 3
                    }
                }]
            }]
        }]
    }"#;

    #[test]
    fn slug_normalizes() {
        assert_eq!(slug("KR Market"), "kr-market");
        assert_eq!(slug("Majestic"), "majestic");
        assert_eq!(slug("  M.G. Road!  "), "m-g-road");
        assert_eq!(slug("Kempegowda   Bus Station"), "kempegowda-bus-station");
    }

    #[test]
    fn key_combines_slugs() {
        assert_eq!(
            MockDirectionsClient::key("Majestic", "KR Market"),
            "majestic__kr-market"
        );
    }

    #[tokio::test]
    async fn load_and_serve_fixture() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("majestic__kr-market.json"), FIXTURE).unwrap();

        let client = MockDirectionsClient::new(dir.path()).unwrap();
        let results = client.bus_routes("Majestic", "KR Market").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].bus_number, "228C");
        assert_eq!(results[0].stops, 3);
    }

    #[tokio::test]
    async fn unknown_pair_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("majestic__kr-market.json"), FIXTURE).unwrap();

        let client = MockDirectionsClient::new(dir.path()).unwrap();
        let result = client.bus_routes("Nowhere", "Elsewhere").await;

        assert!(result.is_err());
    }

    #[test]
    fn empty_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(MockDirectionsClient::new(dir.path()).is_err());
    }

    #[test]
    fn non_json_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("majestic__kr-market.json"), FIXTURE).unwrap();
        std::fs::write(dir.path().join("README.md"), "notes").unwrap();

        let client = MockDirectionsClient::new(dir.path()).unwrap();
        assert_eq!(client.available(), vec!["majestic__kr-market"]);
    }
}
