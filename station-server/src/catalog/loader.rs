//! Catalog sources.
//!
//! The on-disk format is the `stations.csv` layout used by the upstream
//! open data set, with one extra `aliases` column:
//!
//! ```text
//! URI,name,alternative-fr,alternative-nl,alternative-de,alternative-en,aliases,country-code,longitude,latitude,avg_stop_times
//! ```

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::info;

use super::error::CatalogError;
use crate::domain::{Coordinates, LocalizedName, StationId, StationRecord};
use crate::lookup::bare_code;

/// Separates entries in the `aliases` column.
const ALIAS_SEPARATOR: char = ';';

/// Anything that can hand the core its station records.
///
/// Runs on a blocking thread, once per build attempt; see
/// [`SharedDirectory`](super::SharedDirectory).
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<StationRecord>, CatalogError>;
}

/// One row of the stations CSV.
#[derive(Debug, Deserialize)]
struct StationRow {
    #[serde(rename = "URI")]
    uri: String,
    name: String,
    #[serde(rename = "alternative-fr")]
    alternative_fr: Option<String>,
    #[serde(rename = "alternative-nl")]
    alternative_nl: Option<String>,
    #[serde(rename = "alternative-de")]
    alternative_de: Option<String>,
    #[serde(rename = "alternative-en")]
    alternative_en: Option<String>,
    #[serde(default)]
    aliases: Option<String>,
    #[serde(rename = "country-code")]
    country_code: String,
    longitude: f64,
    latitude: f64,
    avg_stop_times: Option<f64>,
}

impl StationRow {
    fn into_record(self, row: usize) -> Result<StationRecord, CatalogError> {
        let malformed = |reason: String| CatalogError::Malformed { row, reason };

        let code = bare_code(&self.uri);
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!("no station code in URI {:?}", self.uri)));
        }

        let name = self.name.trim();
        if name.is_empty() {
            return Err(malformed("empty name".to_string()));
        }

        let country_code = self.country_code.trim().to_lowercase();
        if country_code.is_empty() {
            return Err(malformed("empty country code".to_string()));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(malformed(format!("longitude {} out of range", self.longitude)));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(malformed(format!("latitude {} out of range", self.latitude)));
        }

        let popularity = self.avg_stop_times.unwrap_or(0.0);
        if !popularity.is_finite() || popularity < 0.0 {
            return Err(malformed(format!("invalid avg_stop_times {popularity}")));
        }

        let mut names = vec![LocalizedName::primary(name)];
        for (language, value) in [
            ("fr", self.alternative_fr),
            ("nl", self.alternative_nl),
            ("de", self.alternative_de),
            ("en", self.alternative_en),
        ] {
            if let Some(value) = non_empty(value) {
                names.push(LocalizedName::tagged(language, value));
            }
        }

        let aliases = self
            .aliases
            .as_deref()
            .unwrap_or("")
            .split(ALIAS_SEPARATOR)
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .map(str::to_string)
            .collect();

        Ok(StationRecord {
            id: StationId::new(code),
            country_code,
            names,
            aliases,
            popularity,
            location: Coordinates {
                longitude: self.longitude,
                latitude: self.latitude,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse station records from CSV data, keeping row order.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<StationRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<StationRow>().enumerate() {
        // Header is row 1.
        records.push(row?.into_record(i + 2)?);
    }

    if records.is_empty() {
        return Err(CatalogError::Empty);
    }

    Ok(records)
}

/// Stations read from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> Result<Vec<StationRecord>, CatalogError> {
        let file = std::fs::File::open(&self.path)?;
        let records = parse_csv(file)?;
        info!(
            path = %self.path.display(),
            stations = records.len(),
            "loaded station catalog"
        );
        Ok(records)
    }
}
