//! Station identifier resolution.
//!
//! Upstream systems refer to the same station in three ways:
//!
//! - bare code: `008892007`
//! - operator-prefixed code: `BE.NMBS.008892007`
//! - URI: `http://irail.be/stations/NMBS/008892007`
//!
//! All of them are reduced to the bare code before lookup. Parsing is
//! lenient: whatever is left after stripping the prefixes is tried.

use crate::catalog::Catalog;
use crate::domain::{BARE_CODE_LEN, StationId, StationRecord};

/// The identifier did not resolve to any station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no station with id {id:?}")]
    NotFound { id: String },
}

/// Reduce any supported identifier encoding to its bare code.
///
/// Purely numeric codes shorter than nine digits are zero-padded, since
/// leading zeros are routinely lost by spreadsheets and number parsers.
///
/// # Examples
///
/// ```
/// use station_server::lookup::bare_code;
///
/// assert_eq!(bare_code("008892007"), "008892007");
/// assert_eq!(bare_code("BE.NMBS.008892007"), "008892007");
/// assert_eq!(bare_code("http://irail.be/stations/NMBS/008892007"), "008892007");
/// assert_eq!(bare_code("8892007"), "008892007");
/// ```
pub fn bare_code(raw: &str) -> String {
    let mut code = raw.trim();

    if let Some(end) = code.find(['?', '#']) {
        code = &code[..end];
    }
    code = code.trim_end_matches('/');

    if let Some((_, last)) = code.rsplit_once('/') {
        code = last;
    }
    if let Some((_, last)) = code.rsplit_once('.') {
        code = last;
    }
    let code = code.trim();

    if !code.is_empty() && code.len() < BARE_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit()) {
        format!("{code:0>width$}", width = BARE_CODE_LEN)
    } else {
        code.to_string()
    }
}

/// Find the station `raw` refers to, in any supported encoding.
pub fn resolve<'a>(catalog: &'a Catalog, raw: &str) -> Result<&'a StationRecord, ResolveError> {
    let id = StationId::new(bare_code(raw));
    catalog.get(&id).ok_or_else(|| ResolveError::NotFound {
        id: raw.to_string(),
    })
}
