//! Catalog error types.

use crate::domain::StationId;

/// Errors that can occur while loading or building the station catalog.
///
/// All of them are fatal: the service refuses to start on a catalog it
/// cannot fully trust.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself is malformed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row parsed but holds unusable data
    #[error("malformed station on row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    /// Two rows share one station code
    #[error("duplicate station id {0}")]
    DuplicateId(StationId),

    /// A station without any name
    #[error("station {0} has no name")]
    Unnamed(StationId),

    /// The source contained no stations at all
    #[error("catalog is empty")]
    Empty,

    /// The background build task panicked or was cancelled
    #[error("catalog build did not finish: {0}")]
    Build(#[from] tokio::task::JoinError),
}
