//! Maintenance schedule loading and caching.

pub mod cache;
pub mod loader;
pub mod record;

pub use cache::DatasetCache;
pub use loader::{DataError, load};
pub use record::{Dataset, MaintenanceRecord};
