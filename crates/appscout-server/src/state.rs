use std::sync::Arc;

use appscout_catalog::CatalogClient;

/// Application state shared across handlers.
///
/// Holds nothing mutable: every request is served from its own inputs.
pub struct AppState<C> {
    pub catalog: Arc<C>,
}

impl<C: CatalogClient> AppState<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}
