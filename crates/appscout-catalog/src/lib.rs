//! AppScout Catalog - Client for the upstream app catalog search API.

pub mod client;
pub mod protocol;

pub use client::{CatalogClient, CatalogError, ItunesClient, DEFAULT_ENDPOINT};
pub use protocol::{SearchQuery, SOFTWARE_ENTITY, RESULT_LIMIT};

#[cfg(any(test, feature = "test-utils"))]
pub use client::fake::StaticCatalog;
