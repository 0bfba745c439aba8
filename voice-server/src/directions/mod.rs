//! Directions API client.
//!
//! This module provides an HTTP client for the hosted directions service,
//! restricted to bus transit.
//!
//! Key characteristics:
//! - Only the **first** returned route is used; alternatives are ignored
//! - Steps are filtered to travel mode TRANSIT with vehicle type BUS
//! - `ZERO_RESULTS` is a successful, empty response — not an error
//! - Requests carry metric units and a fixed regional bias

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{DirectionsClient, DirectionsConfig};
pub use convert::bus_results;
pub use error::DirectionsError;
pub use mock::{MockDirectionsClient, slug};
pub use types::{
    DirectionsResponse, Route, RouteLeg, Step, TextValue, TimeText, TransitDetails, TransitLine,
    TransitStop, Vehicle,
};

use chrono::Utc;

use crate::domain::TransitResult;

/// A source of bus transit routes.
///
/// The pipeline depends on this seam rather than a concrete client, so the
/// live client, the cached client, and the fixture-backed mock are all
/// interchangeable.
pub trait RouteSource {
    /// Resolve bus routes for an origin/destination pair, departing now.
    fn bus_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<Vec<TransitResult>, DirectionsError>> + Send;
}

impl<T: RouteSource + Sync> RouteSource for &T {
    async fn bus_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<TransitResult>, DirectionsError> {
        (**self).bus_routes(origin, destination).await
    }
}

impl RouteSource for DirectionsClient {
    async fn bus_routes(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<TransitResult>, DirectionsError> {
        DirectionsClient::bus_routes(self, origin, destination, Utc::now()).await
    }
}
