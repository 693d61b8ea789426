pub mod api;
pub mod health;
pub mod pages;
pub mod ui;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use appscout_catalog::CatalogClient;

use crate::state::AppState;

pub fn create_router<C: CatalogClient + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .merge(pages::routes())
        .merge(api::routes())
        .merge(ui::routes())
        .merge(health::routes())
        // Everything else gets the search page
        .fallback(get(pages::index))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
