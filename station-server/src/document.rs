//! JSON-LD documents for lookup results.
//!
//! The lookup core decides which stations go into a response and in which
//! order; this module decides what the response looks like. Every station
//! becomes a node identified by its URI under the configured base, and a
//! listing wraps the nodes in a named graph whose identity reflects the
//! query that produced it.

use serde::Serialize;
use serde_json::{Value, json};
use url::form_urlencoded;

use crate::domain::{StationId, StationRecord};
use crate::lookup::{StationDirectory, StationLookup};

/// Default namespace for station URIs.
pub const DEFAULT_BASE_URI: &str = "http://irail.be/stations/NMBS";

/// RDF class of every station node.
const STATION_TYPE: &str = "st:Station";

/// The `@context` shared by all documents.
fn context() -> Value {
    json!({
        "st": "http://semweb.mmlab.be/ns/stations#",
        "name": "http://xmlns.com/foaf/0.1/name",
        "alternative": {
            "@id": "http://purl.org/dc/terms/alternative",
            "@container": "@set"
        },
        "longitude": "http://www.w3.org/2003/01/geo/wgs84_pos#long",
        "latitude": "http://www.w3.org/2003/01/geo/wgs84_pos#lat",
        "country": "http://www.geonames.org/ontology#countryCode",
        "avgStopTimes": "st:avgStopTimes"
    })
}

/// A language-tagged literal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageValue {
    #[serde(rename = "@value")]
    pub value: String,
    #[serde(rename = "@language")]
    pub language: String,
}

/// One station in a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative: Vec<LanguageValue>,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub avg_stop_times: f64,
}

/// A list of stations as a named graph.
#[derive(Debug, Clone, Serialize)]
pub struct StationsDocument {
    #[serde(rename = "@context")]
    pub context: Value,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@graph")]
    pub graph: Vec<StationNode>,
}

/// A single station with its context.
#[derive(Debug, Clone, Serialize)]
pub struct StationDocument {
    #[serde(rename = "@context")]
    pub context: Value,
    #[serde(flatten)]
    pub station: StationNode,
}

/// Builds documents under one base URI.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    base_uri: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URI)
    }
}

impl DocumentBuilder {
    /// Create a builder; a trailing `/` on `base_uri` is ignored.
    pub fn new(base_uri: impl Into<String>) -> Self {
        let base_uri = base_uri.into().trim_end_matches('/').to_string();
        Self { base_uri }
    }

    /// URI of one station.
    pub fn station_uri(&self, id: &StationId) -> String {
        format!("{}/{}", self.base_uri, id)
    }

    /// Identity of a listing.
    ///
    /// The unfiltered listing is the base URI itself; a query or country
    /// filter is appended as query parameters.
    pub fn graph_uri(&self, query: &str, country: Option<&str>) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        if !query.is_empty() {
            params.append_pair("q", query);
        }
        if let Some(country) = country {
            params.append_pair("country", country);
        }
        let params = params.finish();

        if params.is_empty() {
            self.base_uri.clone()
        } else {
            format!("{}?{}", self.base_uri, params)
        }
    }

    pub fn node(&self, record: &StationRecord) -> StationNode {
        StationNode {
            id: self.station_uri(&record.id),
            kind: STATION_TYPE,
            name: record.name().to_string(),
            alternative: record
                .alternatives()
                .iter()
                .filter_map(|n| {
                    n.language.as_ref().map(|language| LanguageValue {
                        value: n.value.clone(),
                        language: language.clone(),
                    })
                })
                .collect(),
            country: record.country_code.clone(),
            latitude: record.location.latitude,
            longitude: record.location.longitude,
            avg_stop_times: record.popularity,
        }
    }

    /// Document for a lookup result, nodes in result order.
    pub fn listing(
        &self,
        directory: &StationDirectory,
        lookup: &StationLookup,
    ) -> StationsDocument {
        StationsDocument {
            context: context(),
            id: self.graph_uri(&lookup.query, lookup.country.as_deref()),
            graph: directory
                .records_for(lookup)
                .into_iter()
                .map(|record| self.node(record))
                .collect(),
        }
    }

    /// Document for a single station.
    pub fn station(&self, record: &StationRecord) -> StationDocument {
        StationDocument {
            context: context(),
            station: self.node(record),
        }
    }
}
