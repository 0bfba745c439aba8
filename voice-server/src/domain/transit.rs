//! Transit result types.

use serde::Serialize;

/// One bus leg of a resolved route.
///
/// Produced by filtering a directions response to bus transit steps.
/// Missing upstream fields are substituted with `"N/A"` (strings) or `0`
/// (stop count) at conversion time, so display code never sees gaps.
/// Results are transient: they live in session state for one display cycle
/// and are replaced wholesale on the next query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitResult {
    /// Bus line short name (e.g., "335E").
    pub bus_number: String,

    /// Departure stop name.
    pub from: String,

    /// Arrival stop name.
    pub to: String,

    /// Departure time as display text (e.g., "10:45 am").
    pub departure_time: String,

    /// Leg duration as display text (e.g., "42 mins").
    pub duration: String,

    /// Number of stops on this leg.
    pub stops: u32,
}
