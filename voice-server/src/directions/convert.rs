//! Conversion from directions DTOs to domain transit results.

use crate::domain::TransitResult;

use super::types::{DirectionsResponse, Step};

/// Extract bus transit results from a directions response.
///
/// Only the first returned route is considered. Every leg's steps are
/// scanned in original order, keeping steps whose travel mode is TRANSIT
/// **and** whose vehicle type is BUS. Missing fields fall back to the
/// request's origin/destination strings, `"N/A"`, `"Now"`, `"Unknown"`,
/// or `0` so the result is always fully populated.
pub fn bus_results(
    response: &DirectionsResponse,
    origin: &str,
    destination: &str,
) -> Vec<TransitResult> {
    let Some(route) = response.routes.first() else {
        return Vec::new();
    };

    let mut results = Vec::new();

    for leg in &route.legs {
        let leg_duration = leg
            .duration
            .as_ref()
            .and_then(|d| d.text.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        for step in &leg.steps {
            if !is_bus_step(step) {
                continue;
            }

            // is_bus_step guarantees transit_details is present
            let details = step.transit_details.as_ref().unwrap();

            let bus_number = details
                .line
                .as_ref()
                .and_then(|l| l.short_name.clone())
                .unwrap_or_else(|| "N/A".to_string());

            let from = details
                .departure_stop
                .as_ref()
                .and_then(|s| s.name.clone())
                .unwrap_or_else(|| origin.to_string());

            let to = details
                .arrival_stop
                .as_ref()
                .and_then(|s| s.name.clone())
                .unwrap_or_else(|| destination.to_string());

            let departure_time = details
                .departure_time
                .as_ref()
                .and_then(|t| t.text.clone())
                .unwrap_or_else(|| "Now".to_string());

            results.push(TransitResult {
                bus_number,
                from,
                to,
                departure_time,
                duration: leg_duration.clone(),
                stops: details.num_stops.unwrap_or(0),
            });
        }
    }

    results
}

/// Whether a step is a bus transit step.
fn is_bus_step(step: &Step) -> bool {
    if step.travel_mode != "TRANSIT" {
        return false;
    }

    step.transit_details
        .as_ref()
        .and_then(|d| d.line.as_ref())
        .and_then(|l| l.vehicle.as_ref())
        .and_then(|v| v.kind.as_deref())
        .is_some_and(|kind| kind == "BUS")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DirectionsResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn filters_to_bus_transit_steps_in_order() {
        let response = parse(
            r#"{
            "status": "OK",
            "routes": [{
                "legs": [{
                    "duration": {"text": "55 mins"},
                    "steps": [
                        {"travel_mode": "WALKING"},
                        {
                            "travel_mode": "TRANSIT",
                            "transit_details": {
                                "line": {"short_name": "210", "vehicle": {"type": "BUS"}},
                                "departure_stop": {"name": "Stop A"},
                                "arrival_stop": {"name": "Stop B"},
                                "departure_time": {"text": "9:00 am"},
                                "num_stops": 4
                            }
                        },
                        {
                            "travel_mode": "TRANSIT",
                            "transit_details": {
                                "line": {"short_name": "Purple Line", "vehicle": {"type": "SUBWAY"}},
                                "num_stops": 6
                            }
                        },
                        {
                            "travel_mode": "TRANSIT",
                            "transit_details": {
                                "line": {"short_name": "335E", "vehicle": {"type": "BUS"}},
                                "departure_stop": {"name": "Stop C"},
                                "arrival_stop": {"name": "Stop D"},
                                "departure_time": {"text": "9:30 am"},
                                "num_stops": 2
                            }
                        },
                        {"travel_mode": "WALKING"}
                    ]
                }]
            }]
        }"#,
        );

        let results = bus_results(&response, "Majestic", "KR Market");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].bus_number, "210");
        assert_eq!(results[0].from, "Stop A");
        assert_eq!(results[0].to, "Stop B");
        assert_eq!(results[0].stops, 4);
        assert_eq!(results[1].bus_number, "335E");
        assert_eq!(results[1].stops, 2);

        // Leg duration is shared across steps of the leg
        assert_eq!(results[0].duration, "55 mins");
        assert_eq!(results[1].duration, "55 mins");
    }

    #[test]
    fn zero_routes_is_empty_not_error() {
        let response = parse(r#"{"status": "ZERO_RESULTS", "routes": []}"#);
        assert!(bus_results(&response, "A", "B").is_empty());
    }

    #[test]
    fn only_first_route_is_considered() {
        let response = parse(
            r#"{
            "status": "OK",
            "routes": [
                {"legs": [{"steps": [{
                    "travel_mode": "TRANSIT",
                    "transit_details": {"line": {"short_name": "1", "vehicle": {"type": "BUS"}}}
                }]}]},
                {"legs": [{"steps": [{
                    "travel_mode": "TRANSIT",
                    "transit_details": {"line": {"short_name": "2", "vehicle": {"type": "BUS"}}}
                }]}]}
            ]
        }"#,
        );

        let results = bus_results(&response, "A", "B");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].bus_number, "1");
    }

    #[test]
    fn missing_fields_get_defaults() {
        let response = parse(
            r#"{
            "status": "OK",
            "routes": [{
                "legs": [{
                    "steps": [{
                        "travel_mode": "TRANSIT",
                        "transit_details": {
                            "line": {"vehicle": {"type": "BUS"}}
                        }
                    }]
                }]
            }]
        }"#,
        );

        let results = bus_results(&response, "Majestic", "KR Market");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].bus_number, "N/A");
        assert_eq!(results[0].from, "Majestic");
        assert_eq!(results[0].to, "KR Market");
        assert_eq!(results[0].departure_time, "Now");
        assert_eq!(results[0].duration, "Unknown");
        assert_eq!(results[0].stops, 0);
    }

    #[test]
    fn transit_step_without_vehicle_is_skipped() {
        let response = parse(
            r#"{
            "status": "OK",
            "routes": [{
                "legs": [{
                    "steps": [
                        {"travel_mode": "TRANSIT", "transit_details": {}},
                        {"travel_mode": "TRANSIT"}
                    ]
                }]
            }]
        }"#,
        );

        assert!(bus_results(&response, "A", "B").is_empty());
    }
}
