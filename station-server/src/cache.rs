//! Caching layer for station listings.
//!
//! Lookups are cheap but not free: an inclusive query such as `"b"` scans
//! every variant and serializes hundreds of nodes. Autocomplete clients
//! repeat the same prefixes constantly, so assembled documents are kept
//! for a short while.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::document::{DocumentBuilder, StationsDocument};
use crate::lookup::{QueryOptions, StationDirectory};

/// Cache key: (query as sent, country filter, sorted).
type ListingKey = (String, Option<String>, bool);

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Station directory with cached listings.
pub struct CachedDirectory {
    directory: Arc<StationDirectory>,
    documents: DocumentBuilder,
    listings: MokaCache<ListingKey, Arc<StationsDocument>>,
}

impl CachedDirectory {
    pub fn new(
        directory: Arc<StationDirectory>,
        documents: DocumentBuilder,
        config: &CacheConfig,
    ) -> Self {
        let listings = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self {
            directory,
            documents,
            listings,
        }
    }

    /// Listing document for a query, using the cache if available.
    pub async fn listing(&self, query: &str, options: &QueryOptions) -> Arc<StationsDocument> {
        let key = (
            query.to_string(),
            options.country_filter().map(str::to_string),
            options.sorted,
        );

        self.listings
            .get_with(key, async {
                let lookup = self.directory.search(query, options);
                Arc::new(self.documents.listing(&self.directory, &lookup))
            })
            .await
    }

    /// The underlying directory, for lookups that bypass the cache.
    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    pub fn documents(&self) -> &DocumentBuilder {
        &self.documents
    }
}
