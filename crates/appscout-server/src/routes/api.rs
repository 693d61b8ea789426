use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use appscout_catalog::{CatalogClient, SearchQuery};
use appscout_core::Validator;

use crate::error::ApiError;
use crate::state::AppState;

pub fn routes<C: CatalogClient + 'static>() -> Router<AppState<C>> {
    Router::new().route("/api/search", get(search::<C>))
}

#[derive(Deserialize)]
pub struct SearchParams {
    term: Option<String>,
}

/// GET /api/search?term=... - Forward a software search upstream and
/// return its body untouched.
async fn search<C: CatalogClient + 'static>(
    State(state): State<AppState<C>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let term = params
        .term
        .filter(|term| Validator::validate_term(term).is_ok())
        .ok_or(ApiError::MissingTerm)?;

    match state.catalog.search(SearchQuery::software(term)).await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            tracing::error!("Error fetching from catalog: {}", e);
            Err(ApiError::Upstream(e))
        }
    }
}
