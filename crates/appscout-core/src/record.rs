use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown for text fields the catalog did not provide.
pub const UNKNOWN: &str = "Unknown";

/// One app found in the catalog, normalized for display and export.
///
/// Records have no identity beyond their position in a list; the same app
/// may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub app_name: String,
    pub app_store_url: String,
    pub bundle_id: String,
    pub publisher: String,
}

impl AppRecord {
    pub fn new(
        app_name: impl Into<String>,
        app_store_url: impl Into<String>,
        bundle_id: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            app_store_url: app_store_url.into(),
            bundle_id: bundle_id.into(),
            publisher: publisher.into(),
        }
    }

    /// Build a record from one raw catalog result.
    ///
    /// Missing, `null`, empty or non-string fields fall back to
    /// [`UNKNOWN`], except the store URL which falls back to `""`.
    pub fn from_raw(raw: &Value) -> Self {
        Self {
            app_name: text_field(raw, "trackName").unwrap_or(UNKNOWN).to_string(),
            app_store_url: text_field(raw, "trackViewUrl").unwrap_or("").to_string(),
            bundle_id: text_field(raw, "bundleId").unwrap_or(UNKNOWN).to_string(),
            publisher: text_field(raw, "sellerName").unwrap_or(UNKNOWN).to_string(),
        }
    }
}

fn text_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Body returned by the catalog search endpoint.
///
/// Results are kept as raw JSON so the proxy can hand them back untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_count: Option<u64>,
    pub results: Vec<Value>,
}

impl CatalogResponse {
    /// Parse a raw upstream body. A body without a `results` array is an
    /// error, not an empty result.
    pub fn from_value(body: &Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(body.clone())
    }

    /// True when the catalog matched nothing. `resultCount` may be absent;
    /// the results themselves decide then.
    pub fn is_empty(&self) -> bool {
        self.result_count == Some(0) || self.results.is_empty()
    }

    /// Normalize every raw result, preserving upstream order.
    pub fn records(&self) -> Vec<AppRecord> {
        self.results.iter().map(AppRecord::from_raw).collect()
    }
}
