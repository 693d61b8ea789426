use serde_json::Value;
use thiserror::Error;

use crate::protocol::SearchQuery;

/// Public iTunes search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://itunes.apple.com/search";

/// Error type for catalog requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status code {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Trait for searching the upstream catalog.
///
/// Implementations return the upstream body as raw JSON so callers can pass
/// it on unchanged.
pub trait CatalogClient: Send + Sync {
    fn search(
        &self,
        query: SearchQuery,
    ) -> impl std::future::Future<Output = Result<Value, CatalogError>> + Send;
}

/// HTTP client for the iTunes search API.
pub struct ItunesClient {
    client: reqwest::Client,
    endpoint: String,
}

impl ItunesClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl CatalogClient for ItunesClient {
    async fn search(&self, query: SearchQuery) -> Result<Value, CatalogError> {
        tracing::debug!("Searching catalog for {:?}", query.term);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))?;

        Ok(body)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod fake {
    use std::sync::Mutex;

    use super::*;

    /// Catalog that answers every search with the same canned result and
    /// remembers what it was asked.
    pub struct StaticCatalog {
        response: Result<Value, CatalogError>,
        queries: Mutex<Vec<SearchQuery>>,
    }

    impl StaticCatalog {
        pub fn new(body: Value) -> Self {
            Self {
                response: Ok(body),
                queries: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(error: CatalogError) -> Self {
            Self {
                response: Err(error),
                queries: Mutex::new(Vec::new()),
            }
        }

        /// Queries received so far, oldest first.
        pub fn queries(&self) -> Vec<SearchQuery> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl CatalogClient for StaticCatalog {
        async fn search(&self, query: SearchQuery) -> Result<Value, CatalogError> {
            self.queries.lock().unwrap().push(query);
            self.response.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use super::fake::StaticCatalog;
    use super::*;

    /// Serve `router` on an ephemeral port and return its base URL.
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_search_forwards_fixed_params() {
        let router = Router::new().route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "resultCount": 1, "results": [{ "echo": params }] }))
            }),
        );
        let base = spawn_upstream(router).await;
        let client = ItunesClient::new(format!("{}/search", base));

        let body = client
            .search(SearchQuery::software("google maps"))
            .await
            .unwrap();

        let echoed = &body["results"][0]["echo"];
        assert_eq!(echoed["term"], "google maps");
        assert_eq!(echoed["entity"], "software");
        assert_eq!(echoed["limit"], "10");
        assert_eq!(body["resultCount"], 1);
    }

    #[tokio::test]
    async fn test_search_returns_body_unchanged() {
        let upstream = json!({
            "resultCount": 1,
            "results": [{ "trackName": "Slack", "extra": { "nested": [1, 2, 3] } }]
        });
        let expected = upstream.clone();
        let router = Router::new().route(
            "/search",
            get(move || {
                let body = upstream.clone();
                async move { Json(body) }
            }),
        );
        let base = spawn_upstream(router).await;

        let body = ItunesClient::new(format!("{}/search", base))
            .search(SearchQuery::software("slack"))
            .await
            .unwrap();

        assert_eq!(body, expected);
    }

    #[tokio::test]
    async fn test_search_upstream_error_status() {
        let router = Router::new().route(
            "/search",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = spawn_upstream(router).await;

        let err = ItunesClient::new(format!("{}/search", base))
            .search(SearchQuery::software("slack"))
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::Status(503));
        assert_eq!(err.to_string(), "Request failed with status code 503");
    }

    #[tokio::test]
    async fn test_search_undecodable_body() {
        let router = Router::new().route("/search", get(|| async { "not json" }));
        let base = spawn_upstream(router).await;

        let err = ItunesClient::new(format!("{}/search", base))
            .search(SearchQuery::software("slack"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn test_search_unreachable_upstream() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ItunesClient::new(format!("http://{}/search", addr))
            .search(SearchQuery::software("slack"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Network(_)));
    }

    #[tokio::test]
    async fn test_static_catalog_records_queries() {
        let catalog = StaticCatalog::new(json!({ "resultCount": 0, "results": [] }));

        catalog.search(SearchQuery::software("a")).await.unwrap();
        catalog.search(SearchQuery::software("b")).await.unwrap();

        let terms: Vec<_> = catalog.queries().into_iter().map(|q| q.term).collect();
        assert_eq!(terms, ["a", "b"]);
    }
}
