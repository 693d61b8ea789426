use serde::{Deserialize, Serialize};

/// Entity type sent with every search; restricts results to apps.
pub const SOFTWARE_ENTITY: &str = "software";

/// Fixed number of results requested per search.
pub const RESULT_LIMIT: u32 = 10;

/// Query string sent to the catalog search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub entity: String,
    pub limit: u32,
}

impl SearchQuery {
    /// A software search for `term` with the fixed result limit.
    pub fn software(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            entity: SOFTWARE_ENTITY.to_string(),
            limit: RESULT_LIMIT,
        }
    }
}
