//! End-to-end lookups against the bundled catalog.
//!
//! `data/stations.csv` is a small curated subset of the full station list,
//! so properties that need a full-size catalog run against a generated one
//! (see `synthetic`).

use super::*;
use crate::domain::{Coordinates, LocalizedName};
use crate::test_support::bundled_directory;

fn ids(directory: &StationDirectory, query: &str, options: &QueryOptions) -> Vec<String> {
    directory
        .search(query, options)
        .stations
        .into_iter()
        .map(|id| id.as_str().to_string())
        .collect()
}

fn first(directory: &StationDirectory, query: &str) -> String {
    ids(directory, query, &QueryOptions::default())
        .into_iter()
        .next()
        .unwrap_or_else(|| panic!("no match for {query:?}"))
}

fn count(directory: &StationDirectory, query: &str) -> usize {
    directory.search(query, &QueryOptions::default()).stations.len()
}

/// `n` stations named `Station 0`, `Station 1`, ..., alternating BE/NL.
fn synthetic(n: usize) -> StationDirectory {
    let records = (0..n)
        .map(|i| StationRecord {
            id: StationId::new(format!("{:09}", 8_000_000 + i)),
            country_code: if i % 2 == 0 { "be" } else { "nl" }.to_string(),
            names: vec![LocalizedName::primary(format!("Station {i}"))],
            aliases: Vec::new(),
            popularity: (i % 17) as f64,
            location: Coordinates::default(),
        })
        .collect();
    StationDirectory::build(records).unwrap()
}

#[test]
fn empty_query_lists_every_station_in_catalog_order() {
    let directory = synthetic(650);
    let lookup = directory.search("", &QueryOptions::default());

    assert!(lookup.stations.len() > 600);
    let expected: Vec<_> = directory
        .catalog()
        .records()
        .iter()
        .map(|r| r.id.clone())
        .collect();
    assert_eq!(lookup.stations, expected);
}

#[test]
fn empty_query_honours_country() {
    let directory = synthetic(650);
    let lookup = directory.search("", &QueryOptions::new(Some("NL"), false));
    assert_eq!(lookup.stations.len(), 325);
    assert_eq!(lookup.country.as_deref(), Some("nl"));
}

#[test]
fn bundled_catalog_lists_completely() {
    let directory = bundled_directory();
    assert_eq!(count(&directory, ""), directory.len());
    assert_eq!(count(&directory, "   "), directory.len());
    assert_eq!(count(&directory, "()"), directory.len());
}

#[test]
fn brussels_in_every_language() {
    let directory = bundled_directory();
    assert_eq!(count(&directory, "Brussel"), 6);
    assert_eq!(count(&directory, "Brussels"), 6);
    assert_eq!(count(&directory, "Bruxelles"), 6);
    assert_eq!(count(&directory, "brüssel"), 6);

    assert_eq!(
        ids(&directory, "Brussel", &QueryOptions::default()),
        ids(&directory, "Bruxelles", &QueryOptions::default())
    );
}

#[test]
fn specific_brussels_stations() {
    let directory = bundled_directory();
    assert_eq!(count(&directory, "Bru.-Noord / Brux.-Nord"), 1);
    assert_eq!(first(&directory, "Bru.-Noord / Brux.-Nord"), "008812005");

    assert_eq!(count(&directory, "Brussels Airport - Zaventem"), 1);
    assert_eq!(first(&directory, "Brussels Airport - Zaventem"), "008819406");
}

#[test]
fn bracketed_text_is_ignored() {
    let directory = bundled_directory();
    assert_eq!(count(&directory, "Brussel Nat (be)"), 1);
    assert_eq!(first(&directory, "Brussel Nat (be)"), "008819406");
}

#[test]
fn ligatures_match_their_expansion() {
    let directory = bundled_directory();
    assert_eq!(first(&directory, "Ville-Pommerœul"), "008886546");
    assert_eq!(first(&directory, "Ville-Pommeroeul"), "008886546");
}

#[test]
fn saint_spellings_agree() {
    let directory = bundled_directory();
    let expected = first(&directory, "st pancras");
    assert_eq!(expected, "007015400");
    for query in ["saint pancras", "st-pancras", "st.-pancras", "St. Pancras"] {
        assert_eq!(first(&directory, query), expected, "{query}");
    }
}

#[test]
fn frankfurt_main_station_and_airport() {
    let directory = bundled_directory();
    assert_eq!(first(&directory, "frankfurt am main"), "008011068");
    assert_eq!(first(&directory, "frankfurt main"), "008011068");

    for query in [
        "frankfurt am main flughafen",
        "frankfurt main flughafen",
        "frankfurt flughafen",
    ] {
        assert_eq!(first(&directory, query), "008070003", "{query}");
        assert_eq!(count(&directory, query), 1, "{query}");
    }
}

#[test]
fn apostrophes_are_separators() {
    let directory = bundled_directory();
    assert_eq!(first(&directory, "braine l'alleud"), "008814308");
    assert_eq!(first(&directory, "braine l alleud"), "008814308");
    assert_eq!(count(&directory, "braine l'alleud"), 1);
}

#[test]
fn accents_and_stray_spaces() {
    let directory = bundled_directory();
    assert_eq!(
        first(&directory, "La Louviere- Centre"),
        first(&directory, "La Louvière-Centre")
    );
    assert_eq!(first(&directory, "La Louvière-Centre"), "008882107");
}

#[test]
fn slash_order_does_not_matter() {
    let directory = bundled_directory();
    for query in [
        "Vivier D Oie",
        "Vivier D Oie / Diesdelle",
        "Diesdelle/Vivier d'Oie",
    ] {
        assert_eq!(first(&directory, query), "008814258", "{query}");
    }
}

#[test]
fn every_id_encoding_resolves_to_the_same_station() {
    let directory = bundled_directory();
    for id in [
        "008892007",
        "BE.NMBS.008892007",
        "http://irail.be/stations/NMBS/008892007",
        "https://irail.be/stations/NMBS/008892007/",
    ] {
        assert_eq!(directory.resolve(id).unwrap().name(), "Gent-Sint-Pieters", "{id}");
    }
}

#[test]
fn unknown_id_is_not_found() {
    let directory = bundled_directory();
    let err = directory.resolve("BE.NMBS.000000001").unwrap_err();
    assert_eq!(
        err,
        ResolveError::NotFound {
            id: "BE.NMBS.000000001".to_string()
        }
    );
}

#[test]
fn similar_names_in_different_countries_stay_distinct() {
    let directory = bundled_directory();
    let kapellen = directory.resolve("008821535").unwrap();
    let capellen = directory.resolve("008200518").unwrap();
    assert_eq!(kapellen.name(), "Kapellen");
    assert_eq!(capellen.name(), "Capellen");

    assert_eq!(first(&directory, "Kapellen"), "008821535");
    assert_eq!(first(&directory, "Capellen"), "008200518");
    assert_eq!(count(&directory, "Kapellen"), 1);
    assert_eq!(count(&directory, "Capellen"), 1);
}

#[test]
fn sorted_puts_busiest_station_first() {
    let directory = bundled_directory();
    let gent = ids(&directory, "Gent", &QueryOptions::new(Some("be"), true));
    assert_eq!(gent[0], "008892007");
    assert_eq!(gent.len(), 3);

    let brussels = ids(&directory, "Brussel", &QueryOptions::new(None, true));
    assert_eq!(brussels[0], first(&directory, "Brussels South"));
    assert_eq!(brussels[0], "008814001");
}

#[test]
fn unsorted_keeps_catalog_order_within_a_tier() {
    let directory = bundled_directory();
    let gent = ids(&directory, "Gent", &QueryOptions::default());
    let positions: Vec<_> = gent
        .iter()
        .map(|id| {
            directory
                .catalog()
                .records()
                .iter()
                .position(|r| r.id.as_str() == id)
                .unwrap()
        })
        .collect();
    let mut ordered = positions.clone();
    ordered.sort_unstable();
    assert_eq!(positions, ordered);
}

#[test]
fn exact_beats_partial_regardless_of_popularity() {
    let directory = bundled_directory();
    // "Luxembourg" is an exact name in LU and only a substring of a Brussels name
    let results = ids(&directory, "Luxembourg", &QueryOptions::new(None, true));
    assert_eq!(results.len(), 2);
    assert_eq!(directory.resolve(&results[0]).unwrap().country_code, "lu");
}

#[test]
fn country_filter_excludes_other_countries() {
    let directory = bundled_directory();
    let options = QueryOptions::new(Some("BE"), false);
    let lookup = directory.search("Kapellen", &options);
    for record in directory.records_for(&lookup) {
        assert_eq!(record.country_code, "be");
    }
    assert!(ids(&directory, "Capellen", &options).is_empty());
}

#[test]
fn blank_country_searches_everywhere() {
    let directory = bundled_directory();
    let everywhere = ids(&directory, "Gent", &QueryOptions::default());
    assert_eq!(everywhere.len(), 3);

    let blank = QueryOptions {
        country: Some(String::new()),
        sorted: false,
    };
    assert_eq!(ids(&directory, "Gent", &blank), everywhere);
    assert_eq!(directory.search("Gent", &blank).country, None);
    assert_eq!(count(&directory, ""), directory.len());
    assert_eq!(directory.search("", &blank).stations.len(), directory.len());
}

#[test]
fn nonsense_matches_nothing() {
    let directory = bundled_directory();
    assert_eq!(count(&directory, "xyzzy plugh"), 0);
}

#[test]
fn lookup_echoes_the_query() {
    let directory = bundled_directory();
    let lookup = directory.search("Gent", &QueryOptions::new(Some(" be "), true));
    assert_eq!(lookup.query, "Gent");
    assert_eq!(lookup.country.as_deref(), Some("be"));
    assert_eq!(directory.records_for(&lookup).len(), lookup.stations.len());
}
