pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::sighting_service::SightingService;
pub use domain::sighting::{NearestSighting, Sighting, SightingSummary};
pub use error::RepositoryError;
