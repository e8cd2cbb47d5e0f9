//! Station identifiers and records.

use std::fmt;

use serde::Serialize;

/// Length of a bare station code, e.g. `008892007`.
pub const BARE_CODE_LEN: usize = 9;

/// A bare station code.
///
/// The code is the last component of every identifier scheme a station is
/// known under: `008892007`, `BE.NMBS.008892007` and
/// `http://irail.be/stations/NMBS/008892007` all share it.
///
/// # Examples
///
/// ```
/// use station_server::domain::StationId;
///
/// let id = StationId::new("008892007");
/// assert_eq!(id.as_str(), "008892007");
/// assert_eq!(id.to_string(), "008892007");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Wrap an already-bare code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A display name, optionally tagged with its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedName {
    /// Language tag (`fr`, `nl`, `de`, `en`); `None` for the default name.
    pub language: Option<String>,
    pub value: String,
}

impl LocalizedName {
    /// The untagged default name.
    pub fn primary(value: impl Into<String>) -> Self {
        Self {
            language: None,
            value: value.into(),
        }
    }

    /// A name in a specific language.
    pub fn tagged(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            value: value.into(),
        }
    }
}

/// WGS84 position of a station.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// One physical station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub id: StationId,

    /// Lower-case country code, e.g. `be`.
    pub country_code: String,

    /// Display names. The first entry is the primary name.
    pub names: Vec<LocalizedName>,

    /// Free-text variants not derivable from `names`.
    pub aliases: Vec<String>,

    /// Average number of daily stops; only used for sorted ranking.
    pub popularity: f64,

    pub location: Coordinates,
}

impl StationRecord {
    /// The primary display name.
    pub fn name(&self) -> &str {
        self.names.first().map(|n| n.value.as_str()).unwrap_or("")
    }

    /// Names other than the primary one.
    pub fn alternatives(&self) -> &[LocalizedName] {
        self.names.get(1..).unwrap_or(&[])
    }

    /// Every name variant the station may be searched by.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.names
            .iter()
            .map(|n| n.value.as_str())
            .chain(self.aliases.iter().map(String::as_str))
    }

    /// Whether the station lies in the given (lower-case) country.
    pub fn in_country(&self, country: &str) -> bool {
        self.country_code.eq_ignore_ascii_case(country)
    }
}
