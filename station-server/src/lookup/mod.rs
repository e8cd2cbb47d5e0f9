//! Station lookup: normalization, matching and ranking.
//!
//! A free-text query flows Normalizer → Matcher → Ranker and comes out as
//! an ordered list of station ids. Identifier queries skip all of that and
//! go through the resolver.
//!
//! [`StationDirectory`] bundles the catalog with its alias index and is
//! the only thing callers need to hold.

mod config;
mod index;
mod matcher;
mod normalize;
mod rank;
mod resolve;
mod synonyms;

#[cfg(test)]
mod lookup_tests;

pub use config::QueryOptions;
pub use index::{AliasIndex, IndexedVariant};
pub use matcher::{MatchCandidate, MatchTier, match_stations};
pub use normalize::{CanonicalForm, normalize, normalize_segments};
pub use rank::rank;
pub use resolve::{ResolveError, bare_code, resolve};

use tracing::debug;

use crate::catalog::{Catalog, CatalogError};
use crate::domain::{StationId, StationRecord};

/// Result of a free-text lookup, ready for the result assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct StationLookup {
    /// The query as the caller sent it.
    pub query: String,
    /// The country filter actually applied.
    pub country: Option<String>,
    /// Matching stations, best first.
    pub stations: Vec<StationId>,
}

/// The station catalog together with its alias index.
///
/// Immutable once built and safe to share between any number of
/// concurrent queries.
#[derive(Debug)]
pub struct StationDirectory {
    catalog: Catalog,
    index: AliasIndex,
}

impl StationDirectory {
    /// Build the catalog and index from loaded records.
    pub fn build(records: Vec<StationRecord>) -> Result<Self, CatalogError> {
        let catalog = Catalog::new(records)?;
        let index = AliasIndex::build(&catalog);
        Ok(Self { catalog, index })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &AliasIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Find stations by free text.
    ///
    /// An empty query lists every station (in the requested country).
    pub fn search(&self, query: &str, options: &QueryOptions) -> StationLookup {
        let country = options.country_filter();
        let candidates = match_stations(&self.catalog, &self.index, query, country);
        let stations = rank(candidates, &self.catalog, options.sorted);

        debug!(
            query,
            country = country.unwrap_or(""),
            sorted = options.sorted,
            results = stations.len(),
            "station search"
        );

        StationLookup {
            query: query.to_string(),
            country: country.map(str::to_lowercase),
            stations,
        }
    }

    /// Records for every id in `lookup`, in order.
    pub fn records_for(&self, lookup: &StationLookup) -> Vec<&StationRecord> {
        lookup
            .stations
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .collect()
    }

    /// Find the station an identifier refers to, in any supported encoding.
    pub fn resolve(&self, id: &str) -> Result<&StationRecord, ResolveError> {
        resolve(&self.catalog, id)
    }
}
