//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::lookup::QueryOptions;

/// Query parameters of a station listing.
#[derive(Debug, Default, Deserialize)]
pub struct StationsRequest {
    /// Free-text query; absent or empty lists every station
    pub q: Option<String>,

    /// Optional country code filter (e.g. "be")
    pub country: Option<String>,

    /// Order equally good matches by popularity
    #[serde(default)]
    pub sorted: bool,
}

impl StationsRequest {
    /// The query text, empty when absent.
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or("")
    }

    pub fn options(&self) -> QueryOptions {
        QueryOptions::new(self.country.as_deref(), self.sorted)
    }
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
