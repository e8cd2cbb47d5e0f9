//! Query matching against the alias index.

use std::collections::BTreeMap;

use super::index::{AliasIndex, IndexedVariant};
use super::normalize::{CanonicalForm, normalize};
use crate::catalog::Catalog;

/// How well a query matched a station. Better tiers sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// Same tokens in the same order.
    Exact,
    /// Same tokens, any order.
    TokenSet,
    /// Every query token starts a variant token, or the query is a
    /// substring of the variant.
    Partial,
}

/// A station matched by a query, with its best-matching variant.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate<'a> {
    /// Catalog position of the station.
    pub station: usize,
    pub tier: MatchTier,
    /// The name variant that produced the match; `None` when the query
    /// was empty and every station matched.
    pub variant: Option<&'a str>,
}

/// Match `query` against every station, keeping one candidate per station.
///
/// An empty query (including one that normalizes to nothing) matches every
/// station at [`MatchTier::Exact`]. Candidates come back in catalog order;
/// stations outside `country` are dropped. A blank country is no filter.
pub fn match_stations<'a>(
    catalog: &Catalog,
    index: &'a AliasIndex,
    query: &str,
    country: Option<&str>,
) -> Vec<MatchCandidate<'a>> {
    let country = country.map(str::trim).filter(|c| !c.is_empty());
    let in_scope = |station: usize| country.is_none_or(|c| catalog.at(station).in_country(c));

    let form = normalize(query);
    if form.is_empty() {
        return (0..catalog.len())
            .filter(|&station| in_scope(station))
            .map(|station| MatchCandidate {
                station,
                tier: MatchTier::Exact,
                variant: None,
            })
            .collect();
    }

    let mut best: BTreeMap<usize, MatchCandidate<'a>> = BTreeMap::new();
    let mut offer = |variant: &'a IndexedVariant, tier: MatchTier| {
        if in_scope(variant.station) {
            // Tiers are offered best first, so the first offer wins.
            best.entry(variant.station).or_insert(MatchCandidate {
                station: variant.station,
                tier,
                variant: Some(variant.source.as_str()),
            });
        }
    };

    for variant in index.exact(&form) {
        offer(variant, MatchTier::Exact);
    }
    for variant in index.same_tokens(&form) {
        offer(variant, MatchTier::TokenSet);
    }
    for variant in index.variants() {
        if is_partial_match(&form, &variant.form) {
            offer(variant, MatchTier::Partial);
        }
    }

    best.into_values().collect()
}

/// Partial-typing match: each query token is a prefix of some variant
/// token, or the whole query occurs inside the variant.
fn is_partial_match(query: &CanonicalForm, variant: &CanonicalForm) -> bool {
    let prefixes_all = query.token_set().iter().all(|wanted| {
        variant
            .tokens()
            .iter()
            .any(|token| token.starts_with(wanted.as_str()))
    });
    prefixes_all || variant.as_str().contains(query.as_str())
}
