//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedDirectory};
use crate::document::DocumentBuilder;
use crate::lookup::StationDirectory;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station directory with cached listings
    pub stations: Arc<CachedDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        directory: Arc<StationDirectory>,
        documents: DocumentBuilder,
        cache: &CacheConfig,
    ) -> Self {
        Self {
            stations: Arc::new(CachedDirectory::new(directory, documents, cache)),
        }
    }
}
