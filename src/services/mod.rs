pub mod catalog;
pub use catalog::{CatalogError, CatalogService, MovieCatalog};

pub mod enricher;
pub use enricher::MovieEnricher;

pub mod listing;
pub use listing::{ListingController, ListingSnapshot, LoadOutcome};
