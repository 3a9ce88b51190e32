pub mod geo;
pub mod sighting;

pub use sighting::{NearestSighting, Sighting, SightingSummary};
