//! Real-estate property records: districts with a price per square meter,
//! properties and their rooms. Saves whole aggregates, reads them back
//! composed, and derives total floor area and total price.
//!
//! Storage is pluggable through the repository traits in
//! [`features::properties::repository`]; in-memory and Postgres backends ship
//! in the box. Wire everything together with [`PropertyService::new`].

pub mod features;
pub mod utilities;

pub use features::properties::service::PropertyService;
pub use utilities::errors::AppError;
