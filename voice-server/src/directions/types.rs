//! Directions API response DTOs.
//!
//! These types map to the hosted directions JSON responses, modelled only
//! as far as the pipeline consumes them. `Option` is used liberally because
//! the API omits fields rather than sending nulls for non-transit steps.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// Response status code ("OK", "ZERO_RESULTS", "REQUEST_DENIED", ...).
    pub status: String,

    /// Computed routes. Empty on ZERO_RESULTS.
    #[serde(default)]
    pub routes: Vec<Route>,

    /// Human-readable error detail accompanying a non-OK status.
    pub error_message: Option<String>,
}

/// A single computed route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// The legs of this route. One leg per waypoint pair; a simple
    /// origin→destination request has exactly one.
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

/// One leg of a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteLeg {
    /// The steps making up this leg, in travel order.
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Total leg duration.
    pub duration: Option<TextValue>,
}

/// A single step within a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Travel mode ("TRANSIT", "WALKING", ...).
    pub travel_mode: String,

    /// Transit metadata; only present on TRANSIT steps.
    pub transit_details: Option<TransitDetails>,
}

/// Transit metadata for a TRANSIT step.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitDetails {
    /// The transit line serving this step.
    pub line: Option<TransitLine>,

    /// Boarding stop.
    pub departure_stop: Option<TransitStop>,

    /// Alighting stop.
    pub arrival_stop: Option<TransitStop>,

    /// Scheduled departure time.
    pub departure_time: Option<TimeText>,

    /// Number of stops between boarding and alighting.
    pub num_stops: Option<u32>,
}

/// A transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitLine {
    /// Short display name (e.g., "335E").
    pub short_name: Option<String>,

    /// Full line name.
    pub name: Option<String>,

    /// The vehicle serving this line.
    pub vehicle: Option<Vehicle>,
}

/// The vehicle type on a transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct Vehicle {
    /// Vehicle type code ("BUS", "HEAVY_RAIL", ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A transit stop.
#[derive(Debug, Clone, Deserialize)]
pub struct TransitStop {
    pub name: Option<String>,
}

/// A timestamp with display text.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeText {
    /// Display text (e.g., "10:45 am").
    pub text: Option<String>,
}

/// A value with display text (durations, distances).
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    /// Display text (e.g., "42 mins").
    pub text: Option<String>,

    /// Raw value (seconds for durations).
    pub value: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_transit_response() {
        let json = r#"{
            "status": "OK",
            "routes": [
                {
                    "legs": [
                        {
                            "duration": {"text": "42 mins", "value": 2520},
                            "steps": [
                                {
                                    "travel_mode": "WALKING"
                                },
                                {
                                    "travel_mode": "TRANSIT",
                                    "transit_details": {
                                        "line": {
                                            "short_name": "335E",
                                            "name": "Majestic - Kadugodi",
                                            "vehicle": {"type": "BUS"}
                                        },
                                        "departure_stop": {"name": "Kempegowda Bus Station"},
                                        "arrival_stop": {"name": "KR Market"},
                                        "departure_time": {"text": "10:45 am"},
                                        "num_stops": 3
                                    }
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;

        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "OK");
        assert_eq!(response.routes.len(), 1);

        let leg = &response.routes[0].legs[0];
        assert_eq!(leg.duration.as_ref().unwrap().text.as_deref(), Some("42 mins"));
        assert_eq!(leg.steps.len(), 2);

        let walk = &leg.steps[0];
        assert_eq!(walk.travel_mode, "WALKING");
        assert!(walk.transit_details.is_none());

        let transit = &leg.steps[1];
        assert_eq!(transit.travel_mode, "TRANSIT");
        let details = transit.transit_details.as_ref().unwrap();
        let line = details.line.as_ref().unwrap();
        assert_eq!(line.short_name.as_deref(), Some("335E"));
        assert_eq!(
            line.vehicle.as_ref().unwrap().kind.as_deref(),
            Some("BUS")
        );
        assert_eq!(details.num_stops, Some(3));
    }

    #[test]
    fn deserialize_zero_results() {
        let json = r#"{"status": "ZERO_RESULTS", "routes": []}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "ZERO_RESULTS");
        assert!(response.routes.is_empty());
    }

    #[test]
    fn deserialize_missing_routes_field() {
        // The API omits "routes" entirely on some error statuses
        let json = r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#;
        let response: DirectionsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "REQUEST_DENIED");
        assert!(response.routes.is_empty());
        assert!(response.error_message.is_some());
    }

    #[test]
    fn deserialize_sparse_transit_details() {
        // Every nested field may be absent
        let json = r#"{
            "travel_mode": "TRANSIT",
            "transit_details": {}
        }"#;
        let step: Step = serde_json::from_str(json).unwrap();

        let details = step.transit_details.unwrap();
        assert!(details.line.is_none());
        assert!(details.departure_stop.is_none());
        assert!(details.num_stops.is_none());
    }
}
