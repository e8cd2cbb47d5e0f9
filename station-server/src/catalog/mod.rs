//! The station catalog and how it gets loaded.
//!
//! A [`Catalog`] is the authoritative, ordered list of stations. It is
//! built once from a [`CatalogSource`] and never changes afterwards.

mod error;
mod loader;
mod shared;

use std::collections::HashMap;

pub use error::CatalogError;
pub use loader::{CatalogSource, CsvCatalog, parse_csv};
pub use shared::SharedDirectory;

use crate::domain::{StationId, StationRecord};

/// Immutable ordered collection of stations.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<StationRecord>,
    by_id: HashMap<StationId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Rejects duplicate ids and stations without a name.
    pub fn new(records: Vec<StationRecord>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.name().trim().is_empty() {
                return Err(CatalogError::Unnamed(record.id.clone()));
            }
            if by_id.insert(record.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self { records, by_id })
    }

    /// All stations in catalog order.
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// The station at `position` in catalog order.
    pub fn at(&self, position: usize) -> &StationRecord {
        &self.records[position]
    }

    /// Look up a station by its bare code.
    pub fn get(&self, id: &StationId) -> Option<&StationRecord> {
        self.by_id.get(id).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
