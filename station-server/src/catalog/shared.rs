//! Build-once access to the station directory.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tokio::task;
use tracing::info;

use super::error::CatalogError;
use super::loader::CatalogSource;
use crate::lookup::StationDirectory;

/// Lazily built, process-wide station directory.
///
/// The first caller of [`SharedDirectory::get`] loads the catalog and
/// builds the index; concurrent callers wait for that one build instead of
/// starting their own. A failed build leaves the cell empty, so the next
/// call tries again.
///
/// Loading and indexing run on tokio's blocking pool.
pub struct SharedDirectory {
    source: Arc<dyn CatalogSource>,
    cell: OnceCell<Arc<StationDirectory>>,
}

impl SharedDirectory {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            cell: OnceCell::new(),
        }
    }

    /// The directory, building it on first use.
    pub async fn get(&self) -> Result<Arc<StationDirectory>, CatalogError> {
        let directory = self
            .cell
            .get_or_try_init(|| async {
                let source = Arc::clone(&self.source);
                let directory =
                    task::spawn_blocking(move || StationDirectory::build(source.load()?))
                        .await??;
                info!(
                    stations = directory.len(),
                    variants = directory.index().len(),
                    "station directory ready"
                );
                Ok::<_, CatalogError>(Arc::new(directory))
            })
            .await?;
        Ok(Arc::clone(directory))
    }
}
