//! htmx endpoints behind the search page.
//!
//! The page posts its collections back as JSON in hidden fields; each
//! handler rebuilds the workflow from them, applies one action and returns
//! the re-rendered fragment. Nothing is kept between requests.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::post,
    Form, Router,
};
use serde::Deserialize;

use appscout_catalog::{CatalogClient, SearchQuery};
use appscout_core::{
    export_filename, to_csv, AccumulatedCollection, AppRecord, CatalogResponse, ExportError,
    SearchOutcome, SearchWorkflow, StatusMessage, WorkflowError,
};

use crate::error::ApiError;
use crate::render;
use crate::state::AppState;

pub fn routes<C: CatalogClient + 'static>() -> Router<AppState<C>> {
    Router::new()
        .route("/ui/search", post(search::<C>))
        .route("/ui/accumulate", post(accumulate))
        .route("/ui/remove/{index}", post(remove))
        .route("/ui/clear", post(clear))
        .route("/ui/export", post(export))
}

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    term: String,
}

#[derive(Deserialize)]
pub struct AccumulateForm {
    #[serde(default)]
    current: String,
    #[serde(default)]
    accumulated: String,
    /// True for "No": stop searching and move to the export.
    #[serde(default)]
    finish: bool,
}

#[derive(Deserialize)]
pub struct AccumulatedForm {
    #[serde(default)]
    accumulated: String,
}

#[derive(Deserialize)]
pub struct ClearForm {
    #[serde(default)]
    accumulated: String,
    #[serde(default)]
    confirm: bool,
}

fn decode_records(raw: &str) -> Result<Vec<AppRecord>, ApiError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| ApiError::InvalidState(e.to_string()))
}

fn decode_collection(raw: &str) -> Result<AccumulatedCollection, ApiError> {
    decode_records(raw).map(AccumulatedCollection::from)
}

/// POST /ui/search - Run a search and render results, a notice or an error.
///
/// Always answers 200 so htmx swaps the fragment in and clears the loading
/// indicator, whatever the outcome.
async fn search<C: CatalogClient + 'static>(
    State(state): State<AppState<C>>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, ApiError> {
    let mut workflow = SearchWorkflow::new();

    let term = match workflow.begin_search(&form.term) {
        Ok(term) => term.to_string(),
        Err(WorkflowError::Validation(_)) => return Ok(Html(render::search_output(&workflow))),
        Err(e) => return Err(e.into()),
    };

    let outcome = match state.catalog.search(SearchQuery::software(&term)).await {
        Ok(body) => match CatalogResponse::from_value(&body) {
            Ok(response) => SearchOutcome::from_response(&response),
            Err(e) => {
                tracing::error!("Unexpected catalog response: {}", e);
                SearchOutcome::Failed(format!("Invalid response body: {}", e))
            }
        },
        Err(e) => {
            tracing::error!("Error fetching from catalog: {}", e);
            SearchOutcome::Failed(e.to_string())
        }
    };
    workflow.finish_search(outcome)?;

    Ok(Html(render::search_output(&workflow)))
}

/// POST /ui/accumulate - Answer the "search for more?" prompt.
async fn accumulate(Form(form): Form<AccumulateForm>) -> Result<Response, ApiError> {
    let current = decode_records(&form.current)?;
    let accumulated = decode_collection(&form.accumulated)?;
    let mut workflow = SearchWorkflow::prompting(current, accumulated);

    // The scroll has to wait until the section is swapped in and visible.
    let trigger = if form.finish {
        workflow.finish()?;
        ("HX-Trigger-After-Settle", "scrollToAccumulated")
    } else {
        workflow.continue_searching()?;
        ("HX-Trigger", "searchReset")
    };

    let body = format!(
        "{}\n{}",
        render::accumulated_section(workflow.accumulated()),
        render::clear_search_output()
    );

    Ok(([trigger], Html(body)).into_response())
}

/// POST /ui/remove/{index} - Drop one accumulated result.
async fn remove(
    Path(index): Path<usize>,
    Form(form): Form<AccumulatedForm>,
) -> Result<Html<String>, ApiError> {
    let mut collection = decode_collection(&form.accumulated)?;
    collection.remove(index)?;
    Ok(Html(render::accumulated_section(&collection)))
}

/// POST /ui/clear - Drop every accumulated result, if confirmed.
async fn clear(Form(form): Form<ClearForm>) -> Result<Html<String>, ApiError> {
    let mut collection = decode_collection(&form.accumulated)?;
    if collection.clear(form.confirm) {
        tracing::debug!("Cleared accumulated results");
    }
    Ok(Html(render::accumulated_section(&collection)))
}

/// POST /ui/export - Download the accumulated results as CSV.
async fn export(Form(form): Form<AccumulatedForm>) -> Result<Response, ApiError> {
    let collection = decode_collection(&form.accumulated)?;

    let csv = match to_csv(&collection) {
        Ok(csv) => csv,
        Err(ExportError::NoResults) => {
            let message = StatusMessage::Error(ExportError::NoResults.to_string());
            return Ok(Html(render::message(&message)).into_response());
        }
        Err(e) => {
            tracing::error!("Failed to build CSV: {}", e);
            return Ok((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response());
        }
    };

    let filename = export_filename(chrono::Local::now().date_naive());
    let disposition = format!("attachment; filename=\"{}\"", filename);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}
