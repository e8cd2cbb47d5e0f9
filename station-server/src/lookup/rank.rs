//! Result ordering.

use std::cmp::Ordering;

use super::matcher::MatchCandidate;
use crate::catalog::Catalog;
use crate::domain::StationId;

/// Order matched stations best-first.
///
/// Candidates are ranked by:
/// 1. Match tier (exact, then token-set, then partial)
/// 2. When `sorted`, popularity (busier stations first)
/// 3. Catalog order
///
/// Filtering has already happened; every candidate is returned.
pub fn rank(
    mut candidates: Vec<MatchCandidate<'_>>,
    catalog: &Catalog,
    sorted: bool,
) -> Vec<StationId> {
    candidates.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| {
                if sorted {
                    let a_pop = catalog.at(a.station).popularity;
                    let b_pop = catalog.at(b.station).popularity;
                    b_pop.total_cmp(&a_pop)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| a.station.cmp(&b.station))
    });

    candidates
        .into_iter()
        .map(|c| catalog.at(c.station).id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinates, LocalizedName, StationRecord};
    use crate::lookup::MatchTier;

    fn catalog() -> Catalog {
        let record = |id: &str, popularity: f64| StationRecord {
            id: StationId::new(id),
            country_code: "be".to_string(),
            names: vec![LocalizedName::primary(id)],
            aliases: Vec::new(),
            popularity,
            location: Coordinates::default(),
        };
        Catalog::new(vec![
            record("a", 10.0),
            record("b", 300.0),
            record("c", 300.0),
            record("d", 50.0),
        ])
        .unwrap()
    }

    fn candidate(station: usize, tier: MatchTier) -> MatchCandidate<'static> {
        MatchCandidate {
            station,
            tier,
            variant: None,
        }
    }

    fn ids(ranked: Vec<StationId>) -> Vec<String> {
        ranked.into_iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn unsorted_keeps_catalog_order_within_tier() {
        let candidates = vec![
            candidate(3, MatchTier::Partial),
            candidate(1, MatchTier::Partial),
            candidate(2, MatchTier::Exact),
            candidate(0, MatchTier::Partial),
        ];
        assert_eq!(ids(rank(candidates, &catalog(), false)), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn sorted_orders_by_popularity_within_tier() {
        let candidates = vec![
            candidate(0, MatchTier::Partial),
            candidate(1, MatchTier::Partial),
            candidate(2, MatchTier::Partial),
            candidate(3, MatchTier::Partial),
        ];
        // b and c tie on popularity; catalog order breaks the tie.
        assert_eq!(ids(rank(candidates, &catalog(), true)), vec!["b", "c", "d", "a"]);
    }

    #[test]
    fn tier_outranks_popularity() {
        let candidates = vec![
            candidate(1, MatchTier::Partial),
            candidate(0, MatchTier::TokenSet),
        ];
        assert_eq!(ids(rank(candidates, &catalog(), true)), vec!["a", "b"]);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(rank(Vec::new(), &catalog(), true).is_empty());
    }
}
