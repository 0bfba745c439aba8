//! Domain types for the voice transit assistant.
//!
//! This module contains the core domain model types that flow through the
//! query pipeline. Types that carry invariants (languages, coordinates)
//! enforce them at construction time, so code that receives these types
//! can trust their validity.

mod language;
mod location;
mod query;
mod transit;

pub use language::{ALL_LANGUAGES, InvalidLanguage, Language};
pub use location::{GeoPoint, InvalidCoordinates, Location};
pub use query::ParsedQuery;
pub use transit::TransitResult;
